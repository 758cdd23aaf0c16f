//! Plain-text latency report writer.
//!
//! Renders the fixed-format report and writes it to disk.

use crate::aggregator::{calculate_latency_statistics, rank_drivers, LatencyStatistics};
use crate::parser::schema::{DriverContribution, LatencyData};
use crate::utils::config::{
    DRIVER_HEADER, LATENCY_UNIT, NO_DRIVER_DATA, NO_LATENCY_DATA, RESULTS_HEADER,
};
use crate::utils::error::{OutputError, StatsError};
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Compute statistics and render the full report for extracted data
///
/// **Public** - main entry point for text rendering
///
/// # Errors
/// * `StatsError::InsufficientSamples` - exactly one latency sample was found
pub fn render_report(data: &LatencyData, top_drivers: usize) -> Result<String, StatsError> {
    if !data.has_samples() {
        return Ok(format_report(None, &[]));
    }

    let stats = calculate_latency_statistics(&data.samples)?;
    let drivers = rank_drivers(&data.drivers, top_drivers);

    Ok(format_report(Some(&stats), &drivers))
}

/// Format an already computed report
///
/// `None` statistics means no latency samples were found; only the results
/// header and a notice are written in that case.
pub fn format_report(stats: Option<&LatencyStatistics>, drivers: &[DriverContribution]) -> String {
    let Some(stats) = stats else {
        return format!("\n{}\n{}\n", RESULTS_HEADER, NO_LATENCY_DATA);
    };

    format!(
        "\n{results_header}\n\
         Highest measured interrupt to process latency: {max:.2} {u}\n\
         Average measured interrupt to process latency: {mean:.2} {u}\n\
         \n\
         Median interrupt to process latency: {median:.2} {u}\n\
         90th Percentile interrupt to process latency: {p90:.2} {u}\n\
         95th Percentile interrupt to process latency: {p95:.2} {u}\n\
         99th Percentile interrupt to process latency: {p99:.2} {u}\n\
         99.9th Percentile interrupt to process latency: {p99_9:.2} {u}\n\
         Standard Deviation: {std_dev:.2} {u}\n\
         \n\
         {driver_header}\n\
         {driver_section}",
        results_header = RESULTS_HEADER,
        max = stats.max,
        mean = stats.mean,
        median = stats.median,
        p90 = stats.p90,
        p95 = stats.p95,
        p99 = stats.p99,
        p99_9 = stats.p99_9,
        std_dev = stats.std_dev,
        u = LATENCY_UNIT,
        driver_header = DRIVER_HEADER,
        driver_section = format_driver_section(drivers),
    )
}

/// Driver contribution lines, one per ranked driver
fn format_driver_section(drivers: &[DriverContribution]) -> String {
    if drivers.is_empty() {
        return format!("{}\n", NO_DRIVER_DATA);
    }

    drivers
        .iter()
        .map(|entry| format!("{}: {} occurrences\n", entry.driver, entry.occurrences))
        .collect()
}

/// Write rendered report text to a file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
pub fn write_report(report: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(report.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("Report written successfully ({} bytes)", report.len());

    Ok(())
}

/// Validate an output path and create its parent directories
///
/// **Private** - shared by the text and JSON writers
pub(crate) fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
