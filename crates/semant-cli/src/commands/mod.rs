pub mod check;
pub mod explain;
pub mod typecheck;

use anyhow::{Context, Result};
use semant_core::VersionedProgram;
use std::path::Path;
use tracing::warn;

/// Read a JSON AST from disk
pub(crate) fn load_program(file_path: &str) -> Result<VersionedProgram> {
    let versioned = VersionedProgram::from_path(Path::new(file_path))
        .with_context(|| format!("Failed to load AST: {}", file_path))?;

    if versioned.is_newer_than_supported() {
        warn!(
            ast_version = versioned.ast_version,
            supported = semant_core::AST_VERSION,
            "AST document is newer than this checker supports"
        );
    }

    Ok(versioned)
}
