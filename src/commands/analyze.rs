//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads and classifies the report
//! 2. Calculates latency statistics
//! 3. Ranks driver contributions
//! 4. Writes output files

use crate::aggregator::{calculate_latency_statistics, rank_drivers};
use crate::output::{
    format_report, read_summary, write_report, write_summary, LatencySummaryReport,
};
use crate::parser::{ensure_report_exists, parse_report_file};
use crate::utils::config::{DEFAULT_TOP_DRIVERS, MAX_TOP_DRIVERS};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// XPerf text report to read
    pub report_file: PathBuf,

    /// Destination of the text report
    pub output_file: PathBuf,

    /// Number of drivers listed in the contribution section
    pub top_drivers: usize,

    /// Optional JSON summary destination
    pub output_json: Option<PathBuf>,

    /// Print the text report to stdout as well
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            report_file: PathBuf::new(),
            output_file: PathBuf::from("latency_results.txt"),
            top_drivers: DEFAULT_TOP_DRIVERS,
            output_json: None,
            print_summary: false,
        }
    }
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Report file missing or unreadable
/// * Exactly one latency sample (standard deviation undefined)
/// * File write errors
pub fn execute_analyze(args: &AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    ensure_report_exists(&args.report_file)?;
    println!("[+] Analyzing: {}", args.report_file.display());

    // Step 1: Extract
    info!("Step 1/3: Parsing report...");
    let data = parse_report_file(&args.report_file)?;

    debug!(
        "Extracted {} samples, {} drivers, {} cores",
        data.samples.len(),
        data.drivers.len(),
        data.cores().len()
    );

    // Step 2: Aggregate
    info!("Step 2/3: Calculating latency statistics...");
    let stats = if data.has_samples() {
        let stats = calculate_latency_statistics(&data.samples)
            .context("Failed to calculate latency statistics")?;
        info!("Latency: {}", stats.summary());
        Some(stats)
    } else {
        info!("No latency histogram data found in report");
        None
    };

    let drivers = rank_drivers(&data.drivers, args.top_drivers);

    // Step 3: Write outputs
    info!("Step 3/3: Writing output files...");
    let report = format_report(stats.as_ref(), &drivers);

    write_report(&report, &args.output_file).context("Failed to write latency report")?;
    info!("✓ Report written to: {}", args.output_file.display());

    if let Some(json_path) = &args.output_json {
        let summary = LatencySummaryReport::new(&args.report_file, &data, stats, args.top_drivers);
        write_summary(&summary, json_path).context("Failed to write JSON summary")?;
        verify_summary(&summary, json_path)?;
        info!("✓ JSON summary written to: {}", json_path.display());
    }

    if args.print_summary {
        print!("{}", report);
    }

    info!("Analysis completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Read a written JSON summary back and check it matches what was produced
///
/// **Private** - internal helper for execute_analyze
fn verify_summary(expected: &LatencySummaryReport, json_path: &Path) -> Result<()> {
    let written = read_summary(json_path).context("Failed to read back JSON summary")?;

    debug!(
        "JSON summary v{}: {} samples, {} drivers, {} cores",
        written.version,
        written.sample_count,
        written.top_drivers.len(),
        written.core_usage.len()
    );

    if written.sample_count != expected.sample_count
        || written.top_drivers != expected.top_drivers
        || written.core_usage != expected.core_usage
    {
        anyhow::bail!("JSON summary at {} does not match the analysis", json_path.display());
    }

    Ok(())
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.output_file.as_os_str().is_empty() {
        anyhow::bail!("Output file path cannot be empty");
    }

    if args.report_file == args.output_file {
        anyhow::bail!("Output file must differ from the report file");
    }

    if args.top_drivers == 0 {
        anyhow::bail!("top_drivers must be greater than 0");
    }

    if args.top_drivers > MAX_TOP_DRIVERS {
        anyhow::bail!("top_drivers is too large (max {})", MAX_TOP_DRIVERS);
    }

    Ok(())
}
