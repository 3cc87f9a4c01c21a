//! Diagnostic system for semantic errors
//!
//! Every violation found by the checker becomes a line-tagged `Diagnostic`
//! carrying a stable error code from the registry in [`error_codes`].

pub mod error_codes;
pub mod formatter;
pub mod reporter;

use crate::ast::Line;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic schema version
pub const DIAG_VERSION: u32 = 1;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    /// Error that prevents the program from being accepted
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// Kinds of semantic violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    DuplicateFunction,
    DuplicateGlobal,
    DuplicateParameter,
    DuplicateInScope,
    ReservedNameConflict,
    VoidVariable,
    MissingEntryPoint,
    InvalidEntryPoint,
    UndefinedSymbol,
    UndefinedFunction,
    MissingReturn,
    MisplacedLoopControl,
    ArgumentCountMismatch,
    ArgumentTypeMismatch,
    MissingArguments,
    ReturnTypeMismatch,
    AssignmentTypeMismatch,
    ArithmeticTypeMismatch,
    UnaryTypeMismatch,
    RelationalTypeMismatch,
    EqualityTypeMismatch,
    LogicalTypeMismatch,
    BitwiseTypeMismatch,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 23] = [
        ErrorKind::DuplicateFunction,
        ErrorKind::DuplicateGlobal,
        ErrorKind::DuplicateParameter,
        ErrorKind::DuplicateInScope,
        ErrorKind::ReservedNameConflict,
        ErrorKind::VoidVariable,
        ErrorKind::MissingEntryPoint,
        ErrorKind::InvalidEntryPoint,
        ErrorKind::UndefinedSymbol,
        ErrorKind::UndefinedFunction,
        ErrorKind::MissingReturn,
        ErrorKind::MisplacedLoopControl,
        ErrorKind::ArgumentCountMismatch,
        ErrorKind::ArgumentTypeMismatch,
        ErrorKind::MissingArguments,
        ErrorKind::ReturnTypeMismatch,
        ErrorKind::AssignmentTypeMismatch,
        ErrorKind::ArithmeticTypeMismatch,
        ErrorKind::UnaryTypeMismatch,
        ErrorKind::RelationalTypeMismatch,
        ErrorKind::EqualityTypeMismatch,
        ErrorKind::LogicalTypeMismatch,
        ErrorKind::BitwiseTypeMismatch,
    ];

    /// Stable error code for this kind
    pub fn code(self) -> &'static str {
        use error_codes::*;
        match self {
            ErrorKind::DuplicateFunction => DUPLICATE_FUNCTION,
            ErrorKind::DuplicateGlobal => DUPLICATE_GLOBAL,
            ErrorKind::DuplicateParameter => DUPLICATE_PARAMETER,
            ErrorKind::DuplicateInScope => DUPLICATE_IN_SCOPE,
            ErrorKind::ReservedNameConflict => RESERVED_NAME_CONFLICT,
            ErrorKind::VoidVariable => VOID_VARIABLE,
            ErrorKind::MissingEntryPoint => MISSING_ENTRY_POINT,
            ErrorKind::InvalidEntryPoint => INVALID_ENTRY_POINT,
            ErrorKind::UndefinedSymbol => UNDEFINED_SYMBOL,
            ErrorKind::UndefinedFunction => UNDEFINED_FUNCTION,
            ErrorKind::MissingReturn => MISSING_RETURN,
            ErrorKind::MisplacedLoopControl => MISPLACED_LOOP_CONTROL,
            ErrorKind::ArgumentCountMismatch => ARGUMENT_COUNT_MISMATCH,
            ErrorKind::ArgumentTypeMismatch => ARGUMENT_TYPE_MISMATCH,
            ErrorKind::MissingArguments => MISSING_ARGUMENTS,
            ErrorKind::ReturnTypeMismatch => RETURN_TYPE_MISMATCH,
            ErrorKind::AssignmentTypeMismatch => ASSIGNMENT_TYPE_MISMATCH,
            ErrorKind::ArithmeticTypeMismatch => ARITHMETIC_TYPE_MISMATCH,
            ErrorKind::UnaryTypeMismatch => UNARY_TYPE_MISMATCH,
            ErrorKind::RelationalTypeMismatch => RELATIONAL_TYPE_MISMATCH,
            ErrorKind::EqualityTypeMismatch => EQUALITY_TYPE_MISMATCH,
            ErrorKind::LogicalTypeMismatch => LOGICAL_TYPE_MISMATCH,
            ErrorKind::BitwiseTypeMismatch => BITWISE_TYPE_MISMATCH,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A diagnostic message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic schema version
    pub diag_version: u32,
    /// Severity level
    pub level: DiagnosticLevel,
    /// Error code (e.g., "S3006")
    pub code: String,
    /// Violation kind
    pub kind: ErrorKind,
    /// Main diagnostic message
    pub message: String,
    /// File path
    pub file: String,
    /// Line number (1-based); absent for program-level diagnostics
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub line: Option<Line>,
    /// Short description of the offending construct
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub label: String,
    /// Additional notes (optional)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
    /// Suggested fix (optional)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic for a violation kind
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            diag_version: DIAG_VERSION,
            level: DiagnosticLevel::Error,
            code: kind.code().to_string(),
            kind,
            message: message.into(),
            file: "<unknown>".to_string(),
            line: None,
            label: String::new(),
            notes: Vec::new(),
            help: None,
        }
    }

    /// Set the file path
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Set the line number
    pub fn with_line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Add a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help message
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == DiagnosticLevel::Error
    }

    /// Location as `file:line`, or just the file for program-level diagnostics
    pub fn location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{}", self.file, line),
            None => self.file.clone(),
        }
    }

    /// Format as human-readable string
    pub fn to_human_string(&self) -> String {
        let mut output = String::new();

        // Header: error[S3006]: Cannot apply '+' to Bool and Int
        output.push_str(&format!(
            "{}[{}]: {}\n",
            self.level, self.code, self.message
        ));
        output.push_str(&format!("  --> {}\n", self.location()));

        if !self.label.is_empty() {
            output.push_str(&format!("   | {}\n", self.label));
        }

        for note in &self.notes {
            output.push_str(&format!("   = note: {}\n", note));
        }

        if let Some(help) = &self.help {
            output.push_str(&format!("   = help: {}\n", help));
        }

        output
    }

    /// Format as JSON string
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Format as compact JSON string
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
