//! Latency statistics over the expanded histogram samples.
//!
//! Quantiles use linear interpolation between order statistics
//! (Hyndman-Fan type 7). For cut `i` of `n` groups over sorted data `x`:
//!
//! ```text
//! m     = len - 1
//! j     = (i * m) div n
//! delta = (i * m) - j * n
//! q     = x[j] + (x[j+1] - x[j]) * delta / n
//! ```
//!
//! The position is computed in integer arithmetic so that cut points land
//! exactly on order statistics when they should. Results always stay in
//! `[min, max]`.

use crate::utils::config::{P90_CUT, P95_CUT, P999_CUT, P99_CUT};
use crate::utils::error::StatsError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Summary statistics for a latency sample set (all values in µs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyStatistics {
    pub sample_count: usize,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
    pub p99_9: f64,
    pub std_dev: f64,
}

impl LatencyStatistics {
    /// Percentiles in ascending order, for logging and checks
    pub fn percentiles(&self) -> [f64; 5] {
        [self.median, self.p90, self.p95, self.p99, self.p99_9]
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Samples: {} | Max: {:.2} | Mean: {:.2} | Median: {:.2} | P99: {:.2} | StdDev: {:.2}",
            self.sample_count, self.max, self.mean, self.median, self.p99, self.std_dev
        )
    }
}

/// Calculate the full statistics block for a sample set
///
/// **Public** - main entry point for statistics
///
/// # Errors
/// * `StatsError::InsufficientSamples` - fewer than two samples; the sample
///   standard deviation is undefined
pub fn calculate_latency_statistics(samples: &[f64]) -> Result<LatencyStatistics, StatsError> {
    if samples.len() < 2 {
        return Err(StatsError::InsufficientSamples { found: samples.len() });
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    debug!("Calculating latency statistics over {} samples", sorted.len());

    let cut = |(i, n): (u64, u64)| interpolate_cut(&sorted, i, n);

    Ok(LatencyStatistics {
        sample_count: sorted.len(),
        max: sorted[sorted.len() - 1],
        mean: mean(&sorted),
        median: median(&sorted),
        p90: cut(P90_CUT),
        p95: cut(P95_CUT),
        p99: cut(P99_CUT),
        p99_9: cut(P999_CUT),
        std_dev: sample_std_dev(&sorted)?,
    })
}

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Median of already-sorted data (mean of the middle two for even lengths)
pub fn median(sorted: &[f64]) -> f64 {
    let len = sorted.len();
    if len == 0 {
        return 0.0;
    }
    let mid = len / 2;
    if len % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Cut point `i` when sorted data is split into `n` equal-probability groups.
///
/// Returns `None` for empty data or when `i` is outside `0..=n`.
pub fn quantile_cut(sorted: &[f64], i: u64, n: u64) -> Option<f64> {
    if sorted.is_empty() || n == 0 || i > n {
        return None;
    }
    Some(interpolate_cut(sorted, i, n))
}

/// Type 7 interpolation; requires non-empty `sorted`, `n > 0` and `i <= n`
fn interpolate_cut(sorted: &[f64], i: u64, n: u64) -> f64 {
    let m = (sorted.len() - 1) as u128;
    let scaled = i as u128 * m;
    let n = n as u128;
    let j = (scaled / n) as usize;
    let delta = scaled % n;

    if delta == 0 {
        return sorted[j];
    }

    let lower = sorted[j];
    let upper = sorted[j + 1];
    let value = lower + (upper - lower) * (delta as f64 / n as f64);
    value.min(upper)
}

/// Sample standard deviation (Bessel's correction, n-1 denominator)
///
/// # Errors
/// * `StatsError::InsufficientSamples` - fewer than two samples
pub fn sample_std_dev(samples: &[f64]) -> Result<f64, StatsError> {
    let n = samples.len();
    if n < 2 {
        return Err(StatsError::InsufficientSamples { found: n });
    }

    let mean = mean(samples);
    let sum_sq: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();

    Ok((sum_sq / (n - 1) as f64).sqrt())
}
