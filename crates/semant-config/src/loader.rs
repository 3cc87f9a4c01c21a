//! Configuration Loader
//!
//! Handles loading configuration and applying overrides with proper precedence.

use crate::project::{CheckerConfig, DiagnosticFormat, DiagnosticsConfig, ProjectConfig};
use crate::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};

/// Project configuration file name
pub const CONFIG_FILE_NAME: &str = "semant.toml";

/// Configuration loader
///
/// Loads configuration and merges it with proper precedence:
/// 1. Project config (./semant.toml) - lowest priority
/// 2. Environment variables (SEMANT_*) - overrides project
/// 3. CLI flags - highest priority (handled by caller)
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Skip SEMANT_* environment overrides
    ignore_env: bool,
}

/// Merged configuration result
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Project configuration
    pub project: ProjectConfig,

    /// Project root directory (where semant.toml was found)
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self { ignore_env: false }
    }

    /// Create a loader that does not consult the environment
    pub fn without_env() -> Self {
        Self { ignore_env: true }
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find semant.toml, then applies
    /// environment overrides.
    pub fn load_from_directory(&self, start_dir: &Path) -> ConfigResult<Config> {
        let (project_root, project_config) = self.find_project_config(start_dir)?;
        let project_config = self.apply_env_overrides(project_config)?;

        Ok(Config {
            project: project_config,
            project_root,
        })
    }

    /// Load configuration from a specific project config file
    pub fn load_from_file(&self, config_path: &Path) -> ConfigResult<Config> {
        let project_config = ProjectConfig::load_from_file(config_path)?;
        let project_config = self.apply_env_overrides(project_config)?;

        let project_root = config_path.parent().map(|p| p.to_path_buf());

        Ok(Config {
            project: project_config,
            project_root,
        })
    }

    /// Find project configuration by walking up directory tree
    ///
    /// Returns (project_root, project_config); defaults when nothing is found
    fn find_project_config(
        &self,
        start_dir: &Path,
    ) -> ConfigResult<(Option<PathBuf>, ProjectConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);

            if config_path.exists() {
                let project_config = ProjectConfig::load_from_file(&config_path)?;
                return Ok((Some(current), project_config));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok((None, ProjectConfig::default())),
            }
        }
    }

    /// Apply environment variable overrides to project config
    ///
    /// Recognized: SEMANT_ENTRY_POINT, SEMANT_PRINT_INTRINSIC, SEMANT_DIAGNOSTICS
    fn apply_env_overrides(&self, mut config: ProjectConfig) -> ConfigResult<ProjectConfig> {
        if self.ignore_env {
            return Ok(config);
        }

        let mut overrides = ProjectConfig::default();

        if let Ok(entry_point) = env::var("SEMANT_ENTRY_POINT") {
            overrides
                .checker
                .get_or_insert_with(CheckerConfig::default)
                .entry_point = Some(entry_point);
        }

        if let Ok(print_intrinsic) = env::var("SEMANT_PRINT_INTRINSIC") {
            overrides
                .checker
                .get_or_insert_with(CheckerConfig::default)
                .print_intrinsic = Some(print_intrinsic);
        }

        if let Ok(format) = env::var("SEMANT_DIAGNOSTICS") {
            let parsed = DiagnosticFormat::parse(&format).ok_or_else(|| {
                ConfigError::InvalidValue {
                    field: "SEMANT_DIAGNOSTICS".to_string(),
                    reason: format!("expected 'human' or 'json', got '{}'", format),
                }
            })?;
            overrides
                .diagnostics
                .get_or_insert_with(DiagnosticsConfig::default)
                .format = Some(parsed);
        }

        config.merge(&overrides);
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Get the project root directory
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Check if this is a project (has semant.toml)
    pub fn is_project(&self) -> bool {
        self.project_root.is_some()
    }

    /// Effective checker settings
    pub fn checker(&self) -> CheckerConfig {
        CheckerConfig {
            entry_point: Some(self.project.entry_point().to_string()),
            print_intrinsic: Some(self.project.print_intrinsic().to_string()),
        }
    }
}
