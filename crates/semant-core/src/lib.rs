//! Semant Core - static semantic analysis
//!
//! This library checks a parsed program before code generation:
//! - Function signature registration and entry-point validation
//! - Lexically scoped variable resolution
//! - Expression typing with Int-to-Float widening
//! - Control-flow checks for returns and loop control
//!
//! Analysis never stops at the first error. Every violation is collected as a
//! [`Diagnostic`] and the program is accepted only when none were reported.

/// Semant core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod ast;
pub mod calls;
pub mod diagnostic;
pub mod flow;
pub mod scope;
pub mod symbol;
pub mod typecheck_dump;
pub mod typechecker;
pub mod types;

pub use ast::{Program, VersionedProgram, AST_VERSION};
pub use diagnostic::{error_codes, Diagnostic, DiagnosticLevel, ErrorKind, DIAG_VERSION};
pub use symbol::{Interner, Symbol};
pub use typecheck_dump::{FunctionInfo, GlobalInfo, ParamInfo, TypecheckDump, TYPECHECK_VERSION};
pub use typechecker::{analyze, Analysis, AnalysisError, TypeChecker, HALT_NOTICE};
pub use types::Type;
