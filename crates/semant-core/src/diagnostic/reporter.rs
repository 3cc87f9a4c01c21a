//! Accumulates diagnostics during one analysis run
//!
//! Reporting never aborts checking. Acceptance is decided on the aggregate
//! error count once the whole program has been walked.

use crate::ast::Line;
use crate::diagnostic::{error_codes, Diagnostic, ErrorKind};
use tracing::trace;

#[derive(Debug, Default)]
pub struct Reporter {
    file: String,
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl Reporter {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            diagnostics: Vec::new(),
            error_count: 0,
        }
    }

    /// Record a line-tagged error
    pub fn report(
        &mut self,
        line: Line,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> &mut Diagnostic {
        let diag = self.build(kind, message).with_line(line);
        self.push(diag)
    }

    /// Record a program-level error with no line
    pub fn report_global(
        &mut self,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> &mut Diagnostic {
        let diag = self.build(kind, message);
        self.push(diag)
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Hand over the collected diagnostics and reset the count
    pub fn take(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        std::mem::take(&mut self.diagnostics)
    }

    fn build(&self, kind: ErrorKind, message: impl Into<String>) -> Diagnostic {
        let mut diag = Diagnostic::error(kind, message).with_file(self.file.clone());
        if let Some(help) = error_codes::help_for(kind.code()) {
            diag = diag.with_help(help);
        }
        diag
    }

    fn push(&mut self, diag: Diagnostic) -> &mut Diagnostic {
        trace!(code = %diag.code, line = ?diag.line, message = %diag.message, "semantic error");
        if diag.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diag);
        let last = self.diagnostics.len() - 1;
        &mut self.diagnostics[last]
    }
}
