//! CLI configuration
//!
//! Process-level knobs come from environment variables. Checker settings
//! come from semant.toml merged with SEMANT_* overrides by semant-config.

use anyhow::{Context, Result};
use semant_config::{CheckerConfig, ConfigLoader, DiagnosticFormat};
use semant_core::diagnostic::formatter::ColorMode;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Log filter directives (SEMANT_LOG=debug)
    pub log_filter: Option<String>,
    /// Disable colored output (SEMANT_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_filter: env::var("SEMANT_LOG").ok().filter(|v| !v.trim().is_empty()),
            no_color: env::var("SEMANT_NO_COLOR").is_ok() || env::var("NO_COLOR").is_ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Effective settings for one analysis command
#[derive(Debug, Clone)]
pub struct Settings {
    pub checker: CheckerConfig,
    pub format: DiagnosticFormat,
    pub color: ColorMode,
    /// Directory holding the semant.toml in use, if any
    pub project_root: Option<PathBuf>,
}

impl Settings {
    pub fn wants_json(&self) -> bool {
        self.format == DiagnosticFormat::Json
    }
}

/// Load settings from an explicit config file or the nearest semant.toml
///
/// A color opt-out in the environment beats the configured color preference.
pub fn load_settings(explicit: Option<&Path>, env: &Config) -> Result<Settings> {
    let loader = ConfigLoader::new();
    let config = match explicit {
        Some(path) => loader
            .load_from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => {
            let cwd = env::current_dir().context("Failed to read the working directory")?;
            loader
                .load_from_directory(&cwd)
                .context("Failed to load semant.toml")?
        }
    };

    if let Some(root) = config.project_root() {
        debug!(root = %root.display(), "Using project configuration");
    }

    Ok(Settings {
        checker: config.checker(),
        format: config.project.diagnostic_format(),
        color: if env.no_color {
            ColorMode::Never
        } else {
            ColorMode::from(config.project.color())
        },
        project_root: config.project_root,
    })
}
