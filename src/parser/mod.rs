//! Report parsing and extracted-data definitions.
//!
//! This module turns XPerf DPC/ISR text reports into latency samples,
//! driver contribution totals and per-core usage totals.

pub mod patterns;
pub mod report;
pub mod schema;

// Re-export main types and functions
pub use patterns::{CorePattern, DriverPattern, HistogramPattern, LineMatch, LinePattern};
pub use report::{
    ensure_report_exists, extract_lines, parse_report, parse_report_file, report_lines,
    ReportPatterns,
};
pub use schema::{
    CoreContribution, CoreTally, CoreUsage, DriverContribution, DriverHit, DriverTally,
    HistogramBucket, LatencyData, OrderedTally,
};
