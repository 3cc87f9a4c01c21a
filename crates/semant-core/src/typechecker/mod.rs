//! Semantic analysis and type checking
//!
//! The checker runs in four passes over a program:
//! 1. Register every function signature (so calls resolve in any order)
//! 2. Verify the entry function exists
//! 3. Install global variables into the outermost scope
//! 4. Check every function body in source order
//!
//! Violations are reported and checking continues with a recovery type, so
//! one run collects every error in the program.

mod decl;
mod expr;
mod stmt;

use crate::ast::{Line, Program};
use crate::calls::CallTable;
use crate::diagnostic::reporter::Reporter;
use crate::diagnostic::{Diagnostic, ErrorKind};
use crate::flow::FlowContext;
use crate::scope::ScopeStack;
use crate::symbol::{Builtins, Interner, Symbol};
use crate::typecheck_dump::{FunctionInfo, GlobalInfo, ParamInfo, TypecheckDump};
use crate::types::Type;
use semant_config::CheckerConfig;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Printed by drivers when a program is rejected
pub const HALT_NOTICE: &str = "Compilation halted due to static semantic errors.";

/// Type checker state for one analysis run
pub struct TypeChecker {
    interner: Interner,
    builtins: Builtins,
    /// Variable scopes; the outermost frame holds globals
    scopes: ScopeStack,
    calls: CallTable,
    flow: FlowContext,
    reporter: Reporter,
    /// Declared return type of the function being checked
    return_type: Type,
    /// Globals accepted by pass 3, in source order
    globals: Vec<(Symbol, Type, Line)>,
    /// Errors found by the last run
    error_count: usize,
}

impl TypeChecker {
    /// Create a checker with the default built-in names
    pub fn new() -> Self {
        Self::with_config(&CheckerConfig::default())
    }

    /// Create a checker whose built-in names come from configuration
    pub fn with_config(config: &CheckerConfig) -> Self {
        let mut interner = Interner::new();
        let builtins = Builtins::intern(&mut interner, config);
        Self {
            interner,
            builtins,
            scopes: ScopeStack::new(),
            calls: CallTable::new(),
            flow: FlowContext::new(),
            reporter: Reporter::new("<unknown>"),
            return_type: Type::Void,
            globals: Vec::new(),
            error_count: 0,
        }
    }

    /// Set the file name attached to diagnostics
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.reporter = Reporter::new(file);
        self
    }

    /// Type check a program
    #[instrument(skip(self, program), fields(decls = program.decls.len()))]
    pub fn check(&mut self, program: &Program) -> Vec<Diagnostic> {
        self.reset();

        self.install_calls(program);
        debug!(
            functions = self.calls.len(),
            "Completed pass 1: function signatures registered"
        );

        self.check_entry_point();

        self.install_globals(program);
        debug!(
            globals = self.globals.len(),
            "Completed pass 3: global variables installed"
        );

        let mut functions_checked = 0;
        for func in program.functions() {
            self.check_function(func);
            functions_checked += 1;
        }
        debug!("Completed pass 4: checked {} function bodies", functions_checked);

        self.error_count = self.reporter.error_count();
        if self.error_count > 0 {
            info!(errors = self.error_count, "Semantic analysis found errors");
        } else {
            info!("Semantic analysis completed successfully");
        }

        self.reporter.take()
    }

    /// Type check a program and wrap the outcome
    pub fn analyze(&mut self, program: &Program) -> Analysis {
        Analysis {
            diagnostics: self.check(program),
        }
    }

    /// Errors found by the last run
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of open scope frames; 1 (the global frame) after a run
    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    /// Signatures and globals accepted by the last run
    pub fn dump(&self) -> TypecheckDump {
        let functions = self
            .calls
            .iter()
            .map(|(name, sig)| FunctionInfo {
                name: self.interner.resolve(name).to_string(),
                params: sig
                    .params
                    .iter()
                    .map(|(param, ty)| ParamInfo {
                        name: self.interner.resolve(*param).to_string(),
                        ty: *ty,
                    })
                    .collect(),
                return_type: sig.return_type,
                line: sig.line,
            })
            .collect();

        let globals = self
            .globals
            .iter()
            .map(|(name, ty, line)| GlobalInfo {
                name: self.interner.resolve(*name).to_string(),
                ty: *ty,
                line: *line,
            })
            .collect();

        TypecheckDump::new(functions, globals, self.error_count)
    }

    fn reset(&mut self) {
        self.scopes = ScopeStack::new();
        self.calls = CallTable::new();
        self.flow.reset();
        self.globals.clear();
        self.return_type = Type::Void;
        self.error_count = 0;
        self.reporter.take();
    }

    /// Run `f` inside a fresh scope frame; the frame is always popped
    fn in_scope<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.scopes.enter_scope();
        let result = f(self);
        self.scopes.exit_scope();
        result
    }

    fn error(
        &mut self,
        line: Line,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> &mut Diagnostic {
        self.reporter.report(line, kind, message)
    }

    fn name(&self, symbol: Symbol) -> &str {
        self.interner.resolve(symbol)
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Fatal outcome of an analysis run
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Compilation halted due to static semantic errors.")]
    Halted { errors: usize },
}

/// Outcome of checking one program
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Accept the program only if no errors were recorded
    pub fn into_result(self) -> Result<Vec<Diagnostic>, AnalysisError> {
        match self.error_count() {
            0 => Ok(self.diagnostics),
            errors => Err(AnalysisError::Halted { errors }),
        }
    }
}

/// Check a program with default settings
pub fn analyze(program: &Program) -> Analysis {
    TypeChecker::new().analyze(program)
}
