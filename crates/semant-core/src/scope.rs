//! Lexical scope stack for variables
//!
//! Each frame maps names to their declared type. `probe` looks at the
//! innermost frame only; `resolve` searches outwards.

use crate::symbol::Symbol;
use crate::types::Type;
use std::collections::HashMap;

/// Attempt to declare a name already bound in the innermost frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateInScope {
    /// Type of the existing binding
    pub existing: Type,
}

/// Stack of name-to-type frames (innermost last)
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    frames: Vec<HashMap<Symbol, Type>>,
}

impl ScopeStack {
    /// Create an empty stack with no frames
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn enter_scope(&mut self) {
        self.frames.push(HashMap::new());
    }

    pub fn exit_scope(&mut self) {
        debug_assert!(!self.frames.is_empty(), "exit_scope without enter_scope");
        self.frames.pop();
    }

    /// Bind `name` in the innermost frame
    pub fn declare(&mut self, name: Symbol, ty: Type) -> Result<(), DuplicateInScope> {
        if let Some(existing) = self.probe(name) {
            return Err(DuplicateInScope { existing });
        }
        if self.frames.is_empty() {
            self.enter_scope();
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name, ty);
        }
        Ok(())
    }

    /// Type bound in the innermost frame only
    pub fn probe(&self, name: Symbol) -> Option<Type> {
        self.frames.last().and_then(|frame| frame.get(&name).copied())
    }

    /// Innermost binding of `name` across all frames
    pub fn resolve(&self, name: Symbol) -> Option<Type> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(&name).copied())
    }

    /// Number of open frames
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
