//! Configuration and constants for the CLI.

/// Current JSON summary schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Number of drivers listed in the contribution section by default
pub const DEFAULT_TOP_DRIVERS: usize = 10;
pub const MAX_TOP_DRIVERS: usize = 1000;

/// Unit suffix appended to every rendered latency value
pub const LATENCY_UNIT: &str = "µs";

// Report section headers (fixed text, consumers grep for these)
pub const RESULTS_HEADER: &str = "===== LATENCY RESULTS =====";
pub const DRIVER_HEADER: &str = "===== DRIVER LATENCY CONTRIBUTION =====";
pub const NO_LATENCY_DATA: &str = "No latency data found.";
pub const NO_DRIVER_DATA: &str = "No driver latency data found.";

/// Percentile cut points as (cut index, number of groups).
///
/// The p-th percentile is the last boundary when the data is split into
/// `n` equal-probability groups, e.g. P90 is cut 9 of 10.
pub const P90_CUT: (u64, u64) = (9, 10);
pub const P95_CUT: (u64, u64) = (19, 20);
pub const P99_CUT: (u64, u64) = (99, 100);
pub const P999_CUT: (u64, u64) = (999, 1000);
