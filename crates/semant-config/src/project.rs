//! Project Configuration (semant.toml)
//!
//! Handles project-level configuration stored in `semant.toml` at the project root.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Entry function name used when none is configured
pub const DEFAULT_ENTRY_POINT: &str = "main";

/// Print intrinsic name used when none is configured
pub const DEFAULT_PRINT_INTRINSIC: &str = "printf";

/// Project configuration from semant.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Checker configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checker: Option<CheckerConfig>,

    /// Diagnostic output configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<DiagnosticsConfig>,
}

/// Checker configuration: names the analysis treats as built in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct CheckerConfig {
    /// Name of the required entry function (default: "main")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,

    /// Name of the built-in print intrinsic (default: "printf")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_intrinsic: Option<String>,
}

/// Diagnostic output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Output format (default: human)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<DiagnosticFormat>,

    /// Terminal color preference (default: auto)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorPreference>,
}

/// Diagnostic output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticFormat {
    #[default]
    Human,
    Json,
}

impl DiagnosticFormat {
    /// Parse a format name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "human" | "text" => Some(Self::Human),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Terminal color preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorPreference {
    #[default]
    Auto,
    Always,
    Never,
}

impl CheckerConfig {
    /// Effective entry function name
    pub fn entry_point(&self) -> &str {
        self.entry_point.as_deref().unwrap_or(DEFAULT_ENTRY_POINT)
    }

    /// Effective print intrinsic name
    pub fn print_intrinsic(&self) -> &str {
        self.print_intrinsic
            .as_deref()
            .unwrap_or(DEFAULT_PRINT_INTRINSIC)
    }

    /// Validate the configured names
    pub fn validate(&self) -> ConfigResult<()> {
        validate_identifier("checker.entry_point", self.entry_point())?;
        validate_identifier("checker.print_intrinsic", self.print_intrinsic())?;

        if self.entry_point() == self.print_intrinsic() {
            return Err(ConfigError::ValidationError(format!(
                "entry point and print intrinsic must differ (both are '{}')",
                self.entry_point()
            )));
        }
        Ok(())
    }
}

impl ProjectConfig {
    /// Load project configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the project configuration
    pub fn validate(&self) -> ConfigResult<()> {
        self.checker_or_default().validate()
    }

    /// Checker section, or defaults when absent
    pub fn checker_or_default(&self) -> CheckerConfig {
        self.checker.clone().unwrap_or_default()
    }

    /// Effective entry function name
    pub fn entry_point(&self) -> &str {
        self.checker
            .as_ref()
            .and_then(|c| c.entry_point.as_deref())
            .unwrap_or(DEFAULT_ENTRY_POINT)
    }

    /// Effective print intrinsic name
    pub fn print_intrinsic(&self) -> &str {
        self.checker
            .as_ref()
            .and_then(|c| c.print_intrinsic.as_deref())
            .unwrap_or(DEFAULT_PRINT_INTRINSIC)
    }

    /// Effective diagnostic output format
    pub fn diagnostic_format(&self) -> DiagnosticFormat {
        self.diagnostics
            .as_ref()
            .and_then(|d| d.format)
            .unwrap_or_default()
    }

    /// Effective color preference
    pub fn color(&self) -> ColorPreference {
        self.diagnostics
            .as_ref()
            .and_then(|d| d.color)
            .unwrap_or_default()
    }

    /// Merge another project config into this one
    /// Other config takes precedence for non-None values
    pub fn merge(&mut self, other: &ProjectConfig) {
        if let Some(other_checker) = &other.checker {
            let checker = self.checker.get_or_insert_with(Default::default);
            if other_checker.entry_point.is_some() {
                checker.entry_point = other_checker.entry_point.clone();
            }
            if other_checker.print_intrinsic.is_some() {
                checker.print_intrinsic = other_checker.print_intrinsic.clone();
            }
        }
        if let Some(other_diag) = &other.diagnostics {
            let diagnostics = self.diagnostics.get_or_insert_with(Default::default);
            if other_diag.format.is_some() {
                diagnostics.format = other_diag.format;
            }
            if other_diag.color.is_some() {
                diagnostics.color = other_diag.color;
            }
        }
    }
}

/// Identifiers: ASCII letter or underscore, then letters, digits, underscores
fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn validate_identifier(field: &str, name: &str) -> ConfigResult<()> {
    if name.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: "name cannot be empty".to_string(),
        });
    }
    if !is_valid_identifier(name) {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("'{}' is not a valid identifier", name),
        });
    }
    Ok(())
}
