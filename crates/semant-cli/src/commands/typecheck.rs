//! Typecheck dump command - output checked declarations as JSON

use super::load_program;
use crate::config::Settings;
use anyhow::Result;
use semant_core::TypeChecker;
use tracing::info;

/// Dump typecheck information to JSON
///
/// Semantic errors do not fail the command; they show up in `error_count`.
pub fn run(file_path: &str, settings: &Settings) -> Result<()> {
    let versioned = load_program(file_path)?;

    let mut checker = TypeChecker::with_config(&settings.checker).with_file(file_path);
    let diagnostics = checker.check(&versioned.program);
    if !diagnostics.is_empty() {
        info!(errors = diagnostics.len(), "Dumping a program with semantic errors");
    }

    println!("{}", checker.dump().to_json_string()?);
    Ok(())
}
