//! Configuration schema definitions and loading.
//!
//! Defines the configuration for documentation generation: logging,
//! generator options and page output. All configurations are
//! serializable to/from TOML format and can import other TOML files.

mod docgen;
mod error;
mod general;
mod loading;
mod output;
mod paths;

#[cfg(test)]
mod tests;

pub use docgen::DocgenConfig;
pub use error::ConfigError;
pub use general::{GeneralConfig, LogLevel};
pub use output::OutputConfig;
pub use paths::ConfigPaths;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for schemadoc.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct DocsConfig {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Documentation generator settings.
    #[serde(default)]
    pub docgen: DocgenConfig,

    /// Rendered page settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl DocsConfig {
    /// Parses a configuration from TOML text. Imports are not followed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TomlParseError` if the text is not valid TOML
    /// or does not match the configuration schema.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::toml_parse(e, None))
    }
}
