//! Command-line interface for the callflow utility
//!
//! Converts every exported call-flow page in a folder to Markdown and prints
//! a summary of the run.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::colorizer::colorize_report;
use callflow::core::logging::init_logging;
use callflow::{run_batch, BatchReport, ConvertConfig};

/// Callflow - Convert exported call-flow HTML documents into Markdown
#[derive(Parser, Debug)]
#[command(name = "callflow")]
#[command(about = "Batch convert exported call-flow HTML documents into Markdown")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    /// Folder containing the exported .htm/.html files
    pub folder: PathBuf,

    /// Process at most this many files (in file-name order)
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Log per-file diagnostics; defaults the log level to debug
    #[arg(short, long)]
    pub debug: bool,

    /// Write Markdown here instead of next to each input
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Do not append call-queue summaries after diagrams
    #[arg(long)]
    pub no_summary: bool,

    /// Print the batch report as JSON
    #[arg(long)]
    pub json: bool,

    /// Set log level (trace|debug|info|warn|error|off)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// When to use colors in the summary
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl Cli {
    /// Conversion settings derived from the flags
    pub fn config(&self) -> ConvertConfig {
        ConvertConfig::default()
            .with_limit(self.limit)
            .with_debug(self.debug)
            .with_output_dir(self.output_dir.clone())
            .with_summaries(!self.no_summary)
    }

    /// Explicit log level, if any; `--debug` implies `debug`.
    ///
    /// `None` leaves the choice to `CALLFLOW_LOG_LEVEL` / `RUST_LOG`.
    pub fn log_level(&self) -> Option<&'static str> {
        match self.log_level {
            Some(level) => Some(level.as_str()),
            None if self.debug => Some(LogLevel::Debug.as_str()),
            None => None,
        }
    }
}

/// Main CLI application
#[derive(Debug, Default)]
pub struct CallflowApp;

impl CallflowApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        if let Err(e) = init_logging(cli.log_level(), cli.log_format.map(|f| f.as_str())) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        let report = self.convert_folder(&cli)?;
        let rendered = self.render_report(&report, cli.json, cli.color)?;
        self.write_stdout(&rendered)
    }

    /// Convert the folder named on the command line
    pub fn convert_folder(&self, cli: &Cli) -> Result<BatchReport> {
        let config = cli.config();
        debug!(?config, folder = %cli.folder.display(), "Configuration resolved");
        run_batch(&cli.folder, &config)
            .with_context(|| format!("Failed to convert '{}'", cli.folder.display()))
    }

    /// Text printed to stdout once the batch is done
    pub fn render_report(&self, report: &BatchReport, json: bool, color: ColorChoice) -> Result<String> {
        if json {
            return Ok(serde_json::to_string_pretty(report)?);
        }
        Ok(colorize_report(report, self.should_colorize(color)))
    }

    /// Determine if we should colorize based on the color choice and stdout
    fn should_colorize(&self, color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                crossterm::tty::IsTty::is_tty(&io::stdout())
            }
        }
    }

    fn write_stdout(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if content.is_empty() || content.ends_with('\n') {
            write!(stdout, "{}", content)?;
        } else {
            writeln!(stdout, "{}", content)?;
        }
        stdout.flush()?;
        Ok(())
    }
}
