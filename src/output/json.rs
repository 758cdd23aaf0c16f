//! JSON summary output writer.
//!
//! Writes a machine-readable summary next to the text report. This is also
//! the only place per-core usage leaves the process.

use super::text::prepare_output_path;
use crate::aggregator::{core_contributions, rank_drivers, LatencyStatistics};
use crate::parser::schema::{CoreContribution, DriverContribution, LatencyData};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Serializable summary of one analyzed report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencySummaryReport {
    /// Summary schema version
    pub version: String,

    /// Report file this summary was built from
    pub report_file: String,

    pub sample_count: usize,

    /// `None` when the report had no histogram data
    pub statistics: Option<LatencyStatistics>,

    pub top_drivers: Vec<DriverContribution>,

    /// Collected per-core usage, in discovery order
    pub core_usage: Vec<CoreContribution>,

    /// ISO 8601 timestamp
    pub generated_at: String,
}

impl LatencySummaryReport {
    /// Build a summary from extracted data and (optional) computed statistics
    pub fn new(
        report_file: impl AsRef<Path>,
        data: &LatencyData,
        statistics: Option<LatencyStatistics>,
        top_drivers: usize,
    ) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            report_file: report_file.as_ref().display().to_string(),
            sample_count: data.samples.len(),
            statistics,
            top_drivers: rank_drivers(&data.drivers, top_drivers),
            core_usage: core_contributions(data.cores()),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Write a summary to a pretty-printed JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_summary(
    summary: &LatencySummaryReport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON summary to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, summary)
        .map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    Ok(())
}

/// Read a summary back from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<LatencySummaryReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading JSON summary from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let summary: LatencySummaryReport =
        serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)?;

    Ok(summary)
}
