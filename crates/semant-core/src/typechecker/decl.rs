//! Declaration passes: signatures, entry point, globals, function bodies

use super::TypeChecker;
use crate::ast::{FunctionDecl, Program, VariableDecl};
use crate::calls::Signature;
use crate::diagnostic::ErrorKind;
use crate::types::Type;
use tracing::trace;

impl TypeChecker {
    /// Pass 1: register every function signature
    pub(super) fn install_calls(&mut self, program: &Program) {
        for func in program.functions() {
            let name = self.interner.intern(&func.name);

            if name == self.builtins.print_intrinsic {
                let msg = format!(
                    "Function '{}' conflicts with the built-in print intrinsic",
                    func.name
                );
                self.error(func.line, ErrorKind::ReservedNameConflict, msg);
                continue;
            }

            let params = func
                .params
                .iter()
                .map(|param| (self.interner.intern(&param.name), param.ty))
                .collect();
            let signature = Signature {
                params,
                return_type: func.return_type,
                line: func.line,
            };

            if let Err(existing) = self.calls.register(name, signature) {
                let first = existing.line;
                let msg = format!("Function '{}' was previously defined", func.name);
                self.error(func.line, ErrorKind::DuplicateFunction, msg)
                    .notes
                    .push(format!("first defined at line {}", first));
            }
        }
    }

    /// Pass 2: the entry function must be registered
    pub(super) fn check_entry_point(&mut self) {
        let entry = self.builtins.entry_point;
        if !self.calls.contains(entry) {
            let msg = format!("Entry function '{}' is not defined", self.name(entry));
            self.reporter.report_global(ErrorKind::MissingEntryPoint, msg);
        }
    }

    /// Pass 3: open the global frame and install every global variable
    ///
    /// The frame stays open for the rest of the run. A global is installed
    /// only when it passes every check; only the first violation is reported.
    pub(super) fn install_globals(&mut self, program: &Program) {
        self.scopes.enter_scope();

        for var in program.globals() {
            let name = self.interner.intern(&var.name);

            let violation = if self.scopes.probe(name).is_some() {
                Some((
                    ErrorKind::DuplicateGlobal,
                    format!("Global variable '{}' was previously defined", var.name),
                ))
            } else if var.ty == Type::Void {
                Some((ErrorKind::VoidVariable, void_variable_message(var)))
            } else if name == self.builtins.print_intrinsic {
                Some((
                    ErrorKind::ReservedNameConflict,
                    format!(
                        "Global variable '{}' conflicts with the built-in print intrinsic",
                        var.name
                    ),
                ))
            } else {
                None
            };

            match violation {
                Some((kind, msg)) => {
                    self.error(var.line, kind, msg);
                }
                None => {
                    // probe above guarantees the frame has no binding yet
                    let _ = self.scopes.declare(name, var.ty);
                    self.globals.push((name, var.ty, var.line));
                }
            }
        }
    }

    /// Pass 4: check one function declaration and its body
    pub(super) fn check_function(&mut self, func: &FunctionDecl) {
        trace!(function = %func.name, line = func.line, "checking function");
        self.flow.reset();
        self.return_type = func.return_type;
        let is_entry = self.interner.intern(&func.name) == self.builtins.entry_point;

        self.in_scope(|checker| {
            for param in &func.params {
                checker.declare_param(func, param);
            }

            if is_entry {
                checker.check_entry_shape(func);
            }

            checker.check_block(&func.body);
        });

        if !self.flow.has_unconditional_return() {
            let msg = format!(
                "Function '{}' must have a top-level return statement",
                func.name
            );
            self.error(func.line, ErrorKind::MissingReturn, msg);
        }
        self.flow.reset();
    }

    fn declare_param(&mut self, func: &FunctionDecl, param: &VariableDecl) {
        let name = self.interner.intern(&param.name);
        if self.scopes.declare(name, param.ty).is_err() {
            let msg = format!(
                "Function '{}' has duplicate parameter '{}'",
                func.name, param.name
            );
            self.error(param.line, ErrorKind::DuplicateParameter, msg);
        }
    }

    fn check_entry_shape(&mut self, func: &FunctionDecl) {
        if func.return_type != Type::Void {
            let msg = format!("Entry function '{}' must return Void", func.name);
            self.error(func.line, ErrorKind::InvalidEntryPoint, msg)
                .notes
                .push(format!("declared to return {}", func.return_type));
        }
        if !func.params.is_empty() {
            let msg = format!("Entry function '{}' must not take parameters", func.name);
            self.error(func.line, ErrorKind::InvalidEntryPoint, msg);
        }
    }

    /// Declare a block local into the current frame
    ///
    /// A `Void` local is still bound so later references resolve.
    pub(super) fn declare_local(&mut self, var: &VariableDecl) {
        let name = self.interner.intern(&var.name);
        if let Err(dup) = self.scopes.declare(name, var.ty) {
            let msg = format!("Variable '{}' was previously defined in this scope", var.name);
            self.error(var.line, ErrorKind::DuplicateInScope, msg)
                .notes
                .push(format!("existing binding has type {}", dup.existing));
        }

        if var.ty == Type::Void {
            self.error(var.line, ErrorKind::VoidVariable, void_variable_message(var));
        }
    }
}

fn void_variable_message(var: &VariableDecl) -> String {
    format!("Variable '{}' cannot be of type Void", var.name)
}
