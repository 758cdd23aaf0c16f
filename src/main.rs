//! XPerf Latency CLI
//!
//! Summarizes interrupt-to-process latency and top contributing drivers
//! from an XPerf DPC/ISR text report.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use xperf_latency::commands::{execute_analyze, validate_args, AnalyzeArgs};
use xperf_latency::utils::config::DEFAULT_TOP_DRIVERS;

/// XPerf Latency - DPC/ISR latency report analyzer
#[derive(Parser, Debug)]
#[command(name = "xperf-latency")]
#[command(version, about, long_about = None)]
struct Cli {
    /// XPerf text report to analyze
    report_file: PathBuf,

    /// Where to write the latency results
    output_file: PathBuf,

    /// Number of top drivers to list
    #[arg(long, default_value_t = DEFAULT_TOP_DRIVERS)]
    top_drivers: usize,

    /// Also write a JSON summary to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the results to stdout as well
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = AnalyzeArgs {
        report_file: cli.report_file,
        output_file: cli.output_file,
        top_drivers: cli.top_drivers,
        output_json: cli.json,
        print_summary: cli.summary,
    };

    validate_args(&args)?;
    execute_analyze(&args)?;

    Ok(())
}
