//! Data model for values extracted from an XPerf latency report.
//!
//! All containers here are filled during one pass over the report and
//! read afterwards; nothing mutates them once extraction returns.

use crate::utils::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One histogram row: `count` latencies observed in `(lower, upper]` µs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramBucket {
    pub lower: u64,
    pub upper: u64,
    pub count: u64,
}

impl HistogramBucket {
    /// Bucket midpoint in microseconds
    pub fn midpoint(&self) -> f64 {
        (self.lower as f64 + self.upper as f64) / 2.0
    }
}

/// A `Total = N for module X` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverHit {
    pub count: u64,
    pub driver: String,
}

/// One `CPU N Usage, ... M usec,` fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreUsage {
    pub core_id: String,
    pub latency: u64,
}

/// Running totals keyed by name, remembering first-seen order.
///
/// Ranking ties are broken by discovery order, so a plain `HashMap`
/// is not enough here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedTally {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl OrderedTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `key`, creating it at zero if absent
    pub fn add(&mut self, key: &str, amount: u64) {
        match self.index.get(key) {
            Some(&pos) => {
                let total = &mut self.entries[pos].1;
                *total = total.saturating_add(amount);
            }
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), amount));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.index.get(key).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Driver name -> cumulative occurrence count
pub type DriverTally = OrderedTally;

/// CPU core id -> cumulative usage latency (µs)
pub type CoreTally = OrderedTally;

/// Everything extracted from a single report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatencyData {
    /// Latency samples in µs, expanded from histogram buckets
    pub samples: Vec<f64>,

    pub drivers: DriverTally,

    /// Collected per-core usage. Not rendered in the text report; only
    /// surfaced through [`LatencyData::cores`] and the JSON export.
    pub cores: CoreTally,
}

impl LatencyData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `count` copies of the bucket midpoint
    ///
    /// # Errors
    /// * `ParseError::SampleCapacity` - the samples cannot be allocated
    pub fn add_bucket(&mut self, bucket: &HistogramBucket) -> Result<(), ParseError> {
        let capacity = || ParseError::SampleCapacity { count: bucket.count };
        let count = usize::try_from(bucket.count).map_err(|_| capacity())?;
        self.samples.try_reserve(count).map_err(|_| capacity())?;

        let midpoint = bucket.midpoint();
        self.samples.extend(std::iter::repeat(midpoint).take(count));
        Ok(())
    }

    pub fn add_driver(&mut self, hit: &DriverHit) {
        self.drivers.add(&hit.driver, hit.count);
    }

    pub fn add_core_usage(&mut self, usage: &CoreUsage) {
        self.cores.add(&usage.core_id, usage.latency);
    }

    pub fn cores(&self) -> &CoreTally {
        &self.cores
    }

    pub fn has_samples(&self) -> bool {
        !self.samples.is_empty()
    }
}

/// A single ranked driver contribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverContribution {
    pub driver: String,
    pub occurrences: u64,
}

/// Per-core usage entry as exported in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreContribution {
    pub core: String,
    pub usage_usec: u64,
}
