//! Configuration system for nodepath.
//!
//! This module provides the configuration structure for the `nodepath` binary
//! with sensible defaults and support for serialization/deserialization via
//! serde. Configuration is loaded from a TOML file and merged with
//! command-line arguments, which take precedence.
//!
//! # Example
//!
//! ```
//! use nodepath::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.delimiter, '.');
//! assert_eq!(config.escape, '\\');
//!
//! // Slash-delimited paths
//! let custom = Config {
//!     delimiter: '/',
//!     ..Config::default()
//! };
//! assert_eq!(custom.syntax().unwrap().delimiter(), '/');
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::path::{EmptyComponents, PathError, PathSyntax};

/// How the binary prints results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Text,
    /// One JSON document per input path
    Json,
}

/// Configuration for the nodepath binary.
///
/// All fields have defaults via `Config::default()`, and any field missing
/// from the TOML file takes its default.
///
/// # Fields
///
/// * `delimiter` - Component delimiter (default: '.')
/// * `escape` - Escape character (default: '\\')
/// * `empty_components` - "preserve", "reject" or "collapse" (default: "preserve")
/// * `log_level` - tracing filter used when `RUST_LOG` is unset (default: "warn")
/// * `output` - "text" or "json" (default: "text")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Component delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Escape character
    #[serde(default = "default_escape")]
    pub escape: char,

    /// Handling of empty components when validating paths
    #[serde(default)]
    pub empty_components: EmptyComponents,

    /// tracing filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_delimiter() -> char {
    crate::path::syntax::DEFAULT_DELIMITER
}

fn default_escape() -> char {
    crate::path::syntax::DEFAULT_ESCAPE
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            escape: default_escape(),
            empty_components: EmptyComponents::default(),
            log_level: default_log_level(),
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/nodepath/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("nodepath");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_from(&config_path).unwrap_or_default()
    }

    /// Loads configuration from a specific file, reporting read and parse
    /// errors.
    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to a specific file, creating parent directories.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Applies command-line flags on top of this configuration.
    ///
    /// Each `Some` replaces the configured value; `json` forces JSON output
    /// and leaves the configured format alone when false.
    ///
    /// ```
    /// use nodepath::config::{Config, OutputFormat};
    ///
    /// let config = Config::default().with_overrides(Some('/'), None, None, true);
    /// assert_eq!(config.delimiter, '/');
    /// assert_eq!(config.escape, '\\');
    /// assert_eq!(config.output, OutputFormat::Json);
    /// ```
    pub fn with_overrides(
        self,
        delimiter: Option<char>,
        escape: Option<char>,
        empty_components: Option<EmptyComponents>,
        json: bool,
    ) -> Self {
        Self {
            delimiter: delimiter.unwrap_or(self.delimiter),
            escape: escape.unwrap_or(self.escape),
            empty_components: empty_components.unwrap_or(self.empty_components),
            output: if json { OutputFormat::Json } else { self.output },
            ..self
        }
    }

    /// Builds the path syntax from `delimiter` and `escape`.
    pub fn syntax(&self) -> Result<PathSyntax, PathError> {
        PathSyntax::new(self.delimiter, self.escape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_components_default() {
        let config = Config::default();
        assert_eq!(config.empty_components, EmptyComponents::Preserve);
    }

    #[test]
    fn test_same_delimiter_and_escape_is_invalid() {
        let config = Config {
            escape: '.',
            ..Default::default()
        };
        assert!(config.syntax().is_err());
    }
}
