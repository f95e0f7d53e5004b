use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use pushback::report::report_file;
use pushback::{init_logging, Config, LengthUnit, OutputFormat};

/// Extract top-down aircraft outlines from X-Plane .acf files
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Aircraft files to process
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (json or text)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Units for text output (m or ft)
    #[arg(short, long)]
    units: Option<LengthUnit>,

    /// Configuration file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter (e.g. "debug" or "warn,pushback_outline=debug"), overridden by RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let mut config = Config::load_or_default(args.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.pretty {
        config.output.format = OutputFormat::Json;
        config.output.pretty = true;
    }
    if let Some(units) = args.units {
        config.output.units = units;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    config.validate().context("invalid configuration")?;

    init_logging(&config.logging)?;
    tracing::debug!(
        "pushback {} (built {})",
        pushback::VERSION,
        pushback::BUILD_DATE
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0usize;

    for path in &args.files {
        match report_file(path, &config.output) {
            Ok(text) => writeln!(out, "{}", text.trim_end())?,
            Err(e) if e.is_acf_error() => {
                tracing::error!("Cannot read aircraft file {}: {}", path.display(), e);
                failed += 1;
            }
            Err(e) => {
                tracing::error!("Cannot build outline of {}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        tracing::warn!("{} of {} files failed", failed, args.files.len());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
