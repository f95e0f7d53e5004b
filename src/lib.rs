//! # Pushback
//!
//! Extracts top-down aircraft outlines from X-Plane `.acf` files for
//! drawing pushback and parking overlays.
//!
//! ## Architecture
//!
//! Pushback is organized as a workspace with multiple crates:
//!
//! 1. **pushback-core** - Error types, 2D points, unit conversion
//! 2. **pushback-acf** - `.acf` property file reader
//! 3. **pushback-outline** - Fuselage and wing geometry, outline assembly
//! 4. **pushback-settings** - Configuration file handling
//! 5. **pushback** - Command line binary that ties the crates together

pub mod report;

pub use pushback_acf::AcfFile;
pub use pushback_core::{Error, LengthUnit, OutlineError, Point2D, Result};
pub use pushback_outline::{build_outline, build_outline_from_store, Outline, OutlineVertex};
pub use pushback_settings::{Config, LogFormat, LoggingSettings, OutputFormat, OutputSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - Output on stderr so stdout carries only outlines
/// - RUST_LOG environment variable support, falling back to `settings.level`
/// - Compact, pretty or JSON line format
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(settings.thread_ids);

    let registry = tracing_subscriber::registry().with(env_filter);
    match settings.format {
        LogFormat::Compact => registry.with(fmt_layer.compact()).try_init()?,
        LogFormat::Pretty => registry.with(fmt_layer.pretty()).try_init()?,
        LogFormat::Json => registry.with(fmt_layer.json()).try_init()?,
    }

    Ok(())
}
