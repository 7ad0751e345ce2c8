//! Configuration for dependency resolution and registration rendering

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Resolver configuration.
///
/// `optimize_dependencies` selects minimal-closure resolution (the default)
/// versus registering every known component - the latter is convenient
/// during development. `app_name`, when set, switches rendering to
/// application-scoped registrations targeting that identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct VueConfig {
    pub optimize_dependencies: bool,
    pub app_name: Option<String>,
}

impl Default for VueConfig {
    fn default() -> Self {
        Self {
            optimize_dependencies: true,
            app_name: None,
        }
    }
}

impl VueConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable dependency optimization
    pub fn with_optimize_dependencies(mut self, optimize: bool) -> Self {
        self.optimize_dependencies = optimize;
        self
    }

    /// Set the application object registrations should target
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
