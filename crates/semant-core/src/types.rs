//! Type system representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Static types of the language
///
/// `Void` is both the "no value" return type and the recovery type assigned
/// to expressions that failed to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Int,
    Float,
    String,
    Bool,
    Void,
}

impl Type {
    /// All types, in declaration order
    pub const ALL: [Type; 5] = [
        Type::Int,
        Type::Float,
        Type::String,
        Type::Bool,
        Type::Void,
    ];

    /// Get a human-readable name for this type
    pub fn display_name(&self) -> &'static str {
        match self {
            Type::Int => "Int",
            Type::Float => "Float",
            Type::String => "String",
            Type::Bool => "Bool",
            Type::Void => "Void",
        }
    }

    /// Int or Float
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    /// Operand types accepted by `==` and `!=`
    pub fn is_equatable(&self) -> bool {
        matches!(self, Type::Int | Type::Float | Type::Bool)
    }

    /// Result of `+ - * /` on two operands, with Int widening to Float
    pub fn arithmetic_result(lhs: Type, rhs: Type) -> Option<Type> {
        match (lhs, rhs) {
            (Type::Int, Type::Int) => Some(Type::Int),
            (Type::Float, r) if r.is_numeric() => Some(Type::Float),
            (l, Type::Float) if l.is_numeric() => Some(Type::Float),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
