//! Check command - run semantic analysis on a JSON AST

use super::load_program;
use crate::config::Settings;
use anyhow::Result;
use semant_core::diagnostic::formatter::{ColorMode, DiagnosticFormatter};
use semant_core::{Diagnostic, TypeChecker};

/// Check a program and report every semantic error
///
/// Diagnostics go to stderr. Any error turns into a halt error, which the
/// binary reports before exiting with status 1.
pub fn run(file_path: &str, json: bool, settings: &Settings) -> Result<()> {
    let versioned = load_program(file_path)?;

    let mut checker = TypeChecker::with_config(&settings.checker).with_file(file_path);
    let analysis = checker.analyze(&versioned.program);

    print_diagnostics(&analysis.diagnostics, json, settings.color)?;
    analysis.into_result()?;

    println!("{}: No errors found", file_path);
    Ok(())
}

/// Print diagnostics to stderr, one JSON object per line in JSON mode
fn print_diagnostics(diagnostics: &[Diagnostic], json: bool, color: ColorMode) -> Result<()> {
    if json {
        for diag in diagnostics {
            eprintln!("{}", serde_json::to_string(diag)?);
        }
    } else {
        DiagnosticFormatter::new(color).emit_all(diagnostics);
    }
    Ok(())
}
