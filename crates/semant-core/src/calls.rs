//! Function signature table
//!
//! Built from every function declaration before any body is checked, so
//! calls resolve regardless of declaration order.

use crate::ast::Line;
use crate::symbol::Symbol;
use crate::types::Type;
use std::collections::HashMap;

/// Declared shape of a function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub params: Vec<(Symbol, Type)>,
    pub return_type: Type,
    /// Line of the declaration
    pub line: Line,
}

impl Signature {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Flat name-to-signature map
#[derive(Debug, Clone, Default)]
pub struct CallTable {
    signatures: HashMap<Symbol, Signature>,
    /// Registration order
    order: Vec<Symbol>,
}

impl CallTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a signature; returns the existing one if `name` is taken
    pub fn register(&mut self, name: Symbol, signature: Signature) -> Result<(), &Signature> {
        if self.signatures.contains_key(&name) {
            return Err(&self.signatures[&name]);
        }
        self.signatures.insert(name, signature);
        self.order.push(name);
        Ok(())
    }

    pub fn get(&self, name: Symbol) -> Option<&Signature> {
        self.signatures.get(&name)
    }

    pub fn contains(&self, name: Symbol) -> bool {
        self.signatures.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Signatures in registration order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Signature)> + '_ {
        self.order
            .iter()
            .filter_map(move |name| self.signatures.get(name).map(|sig| (*name, sig)))
    }
}
