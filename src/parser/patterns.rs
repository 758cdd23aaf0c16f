//! Line-shape patterns for XPerf DPC/ISR text reports.
//!
//! Each recognised line shape has its own pattern object. A pattern looks
//! at one line and returns a typed [`LineMatch`]; the three shapes are
//! independent, so a line may match any number of them.

use super::schema::{CoreUsage, DriverHit, HistogramBucket};
use log::warn;
use regex::{Captures, Regex};

const HISTOGRAM_RE: &str = r"Elapsed Time, >\s*(\d+) usecs AND <=\s*(\d+) usecs,\s*(\d+),";
const DRIVER_RE: &str = r"Total = (\d+) for module (\S+)";
const CORE_RE: &str = r"CPU (\d+) Usage,.*?(\d+)\s+usec,";

/// Result of applying one pattern to one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    NoMatch,
    Histogram(HistogramBucket),
    Driver(DriverHit),
    /// All per-core fragments found on the line (never empty)
    Core(Vec<CoreUsage>),
}

/// A single recognisable line shape
pub trait LinePattern {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    fn match_line(&self, line: &str) -> LineMatch;
}

/// `Elapsed Time, > <lo> usecs AND <= <hi> usecs, <count>,`
#[derive(Debug, Clone)]
pub struct HistogramPattern {
    regex: Regex,
}

impl HistogramPattern {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self { regex: Regex::new(HISTOGRAM_RE)? })
    }
}

impl LinePattern for HistogramPattern {
    fn name(&self) -> &'static str {
        "histogram"
    }

    fn match_line(&self, line: &str) -> LineMatch {
        let Some(caps) = self.regex.captures(line) else {
            return LineMatch::NoMatch;
        };

        match (
            capture_u64(&caps, 1, self.name()),
            capture_u64(&caps, 2, self.name()),
            capture_u64(&caps, 3, self.name()),
        ) {
            (Some(lower), Some(upper), Some(count)) => {
                LineMatch::Histogram(HistogramBucket { lower, upper, count })
            }
            _ => LineMatch::NoMatch,
        }
    }
}

/// `Total = <count> for module <driver>`
#[derive(Debug, Clone)]
pub struct DriverPattern {
    regex: Regex,
}

impl DriverPattern {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self { regex: Regex::new(DRIVER_RE)? })
    }
}

impl LinePattern for DriverPattern {
    fn name(&self) -> &'static str {
        "driver"
    }

    fn match_line(&self, line: &str) -> LineMatch {
        let Some(caps) = self.regex.captures(line) else {
            return LineMatch::NoMatch;
        };

        match capture_u64(&caps, 1, self.name()) {
            Some(count) => LineMatch::Driver(DriverHit {
                count,
                driver: caps[2].to_string(),
            }),
            None => LineMatch::NoMatch,
        }
    }
}

/// One or more `CPU <id> Usage, ... <latency> usec,` fragments per line
#[derive(Debug, Clone)]
pub struct CorePattern {
    regex: Regex,
}

impl CorePattern {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self { regex: Regex::new(CORE_RE)? })
    }
}

impl LinePattern for CorePattern {
    fn name(&self) -> &'static str {
        "core"
    }

    fn match_line(&self, line: &str) -> LineMatch {
        let usages: Vec<CoreUsage> = self
            .regex
            .captures_iter(line)
            .filter_map(|caps| {
                capture_u64(&caps, 2, self.name()).map(|latency| CoreUsage {
                    core_id: caps[1].to_string(),
                    latency,
                })
            })
            .collect();

        if usages.is_empty() {
            LineMatch::NoMatch
        } else {
            LineMatch::Core(usages)
        }
    }
}

/// Parse a digit-only capture group.
///
/// The patterns only capture `\d+`, so the sole failure is a value that
/// does not fit in `u64`; such captures are dropped.
fn capture_u64(caps: &Captures<'_>, group: usize, pattern: &str) -> Option<u64> {
    let digits = caps.get(group)?.as_str();
    match digits.parse::<u64>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {} match with out-of-range value '{}': {}", pattern, digits, e);
            None
        }
    }
}
