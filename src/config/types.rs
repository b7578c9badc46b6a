//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing.

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
///
/// Controls how the analysis report is rendered:
/// - `Plain`: grouped label/value rows with status-colored values (default)
/// - `Json`: a single JSON document for programmatic processing
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Grouped label/value rows with status-colored values (default)
    Plain,
    /// A single JSON document for programmatic processing
    Json,
}

/// Command-line options.
///
/// This struct is automatically generated by `clap` from the field
/// attributes. All options have sensible defaults and can be overridden via
/// command-line flags.
///
/// # Examples
///
/// ```bash
/// # Basic usage (https:// is assumed)
/// url_inspector example.com
///
/// # Machine-readable report
/// url_inspector https://example.com/path --output json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "url_inspector",
    about = "Analyzes a URL and reports descriptive and heuristic security attributes."
)]
pub struct Opt {
    /// URL to analyze (scheme optional; https:// is assumed when missing)
    #[arg(default_value = "")]
    pub url: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,
}
