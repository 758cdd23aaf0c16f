//! Aggregation of extracted report data into statistics and rankings.
//!
//! This module transforms parsed latency data into:
//! - Latency statistics (max, mean, median, percentiles, std dev)
//! - Driver contribution ranking (top N drivers)

pub mod drivers;
pub mod metrics;

// Re-export main types and functions
pub use drivers::{core_contributions, rank_drivers};
pub use metrics::{calculate_latency_statistics, quantile_cut, sample_std_dev, LatencyStatistics};
