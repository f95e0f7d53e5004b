//! Pushback Settings Crate
//!
//! Handles configuration of the `pushback` command line tool.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, LogFormat, LoggingSettings, OutputFormat, OutputSettings};
pub use error::SettingsError;
