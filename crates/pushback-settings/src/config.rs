//! Configuration management for pushback
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats; the default file lives in the
//! platform config directory.
//!
//! Configuration is organized into sections:
//! - Output settings (format, pretty printing, display units)
//! - Logging settings (level filter, log format)

pub use pushback_core::units::LengthUnit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

use crate::error::SettingsError;

/// Levels accepted by the logging filter
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// How outlines are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON document per aircraft
    Json,
    /// Human-readable summary and point list
    Text,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Units for dimensions in text output
    pub units: LengthUnit,
    /// List every outline point in text output
    pub list_points: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: false,
            units: LengthUnit::Meters,
            list_points: true,
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        Self::Compact
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directives, e.g. `warn` or `warn,pushback_outline=debug`;
    /// overridden by `RUST_LOG`
    pub level: String,
    pub format: LogFormat,
    pub thread_ids: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            thread_ids: false,
        }
    }
}

/// Complete tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => return Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, else from the default location if a file
    /// exists there, else return defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            _ => return Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_log_filter(&self.logging.level)
            .map_err(|reason| SettingsError::invalid("logging.level", reason))?;

        if self.output.pretty && self.output.format == OutputFormat::Text {
            return Err(SettingsError::invalid(
                "output.pretty",
                "pretty printing only applies to json output",
            ));
        }

        Ok(())
    }
}

/// Check a logging filter such as `warn` or `info,pushback_outline=debug`
///
/// Accepts `EnvFilter` directive syntax, but every directive must end in an
/// explicit level; a bare target like `pushback_outline` is rejected.
fn check_log_filter(filter: &str) -> Result<(), String> {
    EnvFilter::try_new(filter).map_err(|e| format!("'{}': {}", filter, e))?;

    let mut directives = filter.split(',').map(str::trim).filter(|d| !d.is_empty()).peekable();
    if directives.peek().is_none() {
        return Err("empty filter".to_string());
    }
    for directive in directives {
        let level = directive
            .rsplit_once('=')
            .map_or(directive, |(_, level)| level)
            .to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "'{}' does not end in one of {}",
                directive,
                LOG_LEVELS.join(", ")
            ));
        }
    }
    Ok(())
}

/// `<config dir>/pushback/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pushback").join("config.toml"))
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
