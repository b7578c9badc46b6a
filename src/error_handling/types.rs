//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors produced by the analysis pipeline.
///
/// There are exactly two kinds, and the `Display` implementation of each
/// variant is the message shown to the user verbatim. Both are recovered at
/// the top level of the entry point; no partial results are produced when one
/// occurs.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input was empty (or all whitespace) after trimming.
    #[error("Please enter a URL to analyze")]
    EmptyInput,

    /// The normalized string failed URL syntax validation.
    ///
    /// The underlying parse error is retained as the source for logging, but
    /// is never surfaced to the user.
    #[error("Invalid URL format. Please check your URL and try again.")]
    InvalidUrl(#[source] url::ParseError),
}
