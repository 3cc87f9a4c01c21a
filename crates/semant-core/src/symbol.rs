//! Identifier interning
//!
//! Names are interned once and compared as `Symbol` handles afterwards.
//! Symbols are only meaningful relative to the interner that produced them.

use lasso::{Rodeo, Spur};
use semant_config::CheckerConfig;

/// Interned identifier
pub type Symbol = Spur;

/// String interner owned by one analysis run
#[derive(Debug, Default)]
pub struct Interner {
    rodeo: Rodeo,
}

impl Interner {
    pub fn new() -> Self {
        Self {
            rodeo: Rodeo::default(),
        }
    }

    /// Intern a name; equal strings yield equal symbols
    pub fn intern(&mut self, name: &str) -> Symbol {
        self.rodeo.get_or_intern(name)
    }

    /// Look up a name without interning it
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.rodeo.get(name)
    }

    pub fn resolve(&self, symbol: Symbol) -> &str {
        self.rodeo.resolve(&symbol)
    }

    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

/// Names with fixed meaning to the checker, materialized once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builtins {
    /// The required entry function
    pub entry_point: Symbol,
    /// The built-in print intrinsic
    pub print_intrinsic: Symbol,
}

impl Builtins {
    pub fn intern(interner: &mut Interner, config: &CheckerConfig) -> Self {
        Self {
            entry_point: interner.intern(config.entry_point()),
            print_intrinsic: interner.intern(config.print_intrinsic()),
        }
    }
}
