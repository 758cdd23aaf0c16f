//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and classifying a report
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Report file '{}' not found.", .0.display())]
    ReportNotFound(PathBuf),

    #[error("Failed to read report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Cannot hold {count} latency samples from one histogram bucket")]
    SampleCapacity { count: u64 },
}

/// Errors that can occur while summarizing latency samples
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("Standard deviation requires at least two latency samples, found {found}")]
    InsufficientSamples { found: usize },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
