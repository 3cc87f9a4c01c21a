//! Semant Configuration System
//!
//! Provides configuration for the semantic checker:
//! - Project configuration (semant.toml)
//! - Environment variable overrides
//! - Configuration precedence and merging
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded and merged in the following order (later overrides earlier):
//! 1. Built-in defaults (`main` entry point, `printf` print intrinsic)
//! 2. Project config (./semant.toml, searched upwards)
//! 3. Environment variables (SEMANT_*)
//! 4. CLI flags
//!
//! # Example
//!
//! ```no_run
//! use semant_config::ConfigLoader;
//! use std::path::Path;
//!
//! let loader = ConfigLoader::new();
//! let config = loader.load_from_directory(Path::new(".")).unwrap();
//! assert_eq!(config.project.entry_point(), "main");
//! ```

pub mod loader;
pub mod project;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

// Re-export main types
pub use loader::{Config, ConfigLoader, CONFIG_FILE_NAME};
pub use project::{
    CheckerConfig, ColorPreference, DiagnosticFormat, DiagnosticsConfig, ProjectConfig,
    DEFAULT_ENTRY_POINT, DEFAULT_PRINT_INTRINSIC,
};
