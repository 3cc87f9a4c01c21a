//! Typecheck dump
//!
//! Stable JSON view of the signatures and globals a checker accepted, for
//! tooling that wants the declared interface of a program without
//! re-running analysis.

use crate::ast::Line;
use crate::types::Type;
use serde::{Deserialize, Serialize};

/// Typecheck dump schema version
pub const TYPECHECK_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

/// Registered function signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    pub params: Vec<ParamInfo>,
    pub return_type: Type,
    /// Line of the declaration
    pub line: Line,
}

/// Installed global variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    pub line: Line,
}

/// Typecheck dump output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypecheckDump {
    /// Typecheck dump schema version
    pub typecheck_version: u32,
    /// Functions in declaration order; rejected declarations are absent
    pub functions: Vec<FunctionInfo>,
    /// Globals in declaration order; rejected declarations are absent
    pub globals: Vec<GlobalInfo>,
    /// Errors reported by the run
    pub error_count: usize,
}

impl TypecheckDump {
    pub fn new(
        functions: Vec<FunctionInfo>,
        globals: Vec<GlobalInfo>,
        error_count: usize,
    ) -> Self {
        Self {
            typecheck_version: TYPECHECK_VERSION,
            functions,
            globals,
            error_count,
        }
    }

    pub fn function(&self, name: &str) -> Option<&FunctionInfo> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Convert to JSON string (pretty-printed)
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert to compact JSON string
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
