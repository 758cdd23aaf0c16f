//! Single-pass extraction over report lines.
//!
//! Reads the report into memory, runs every line through all line
//! patterns and accumulates the results into a fresh [`LatencyData`].

use super::patterns::{CorePattern, DriverPattern, HistogramPattern, LineMatch, LinePattern};
use super::schema::LatencyData;
use crate::utils::error::ParseError;
use log::debug;
use std::fs;
use std::path::Path;

/// The full set of line patterns recognised in a report
pub struct ReportPatterns {
    patterns: Vec<Box<dyn LinePattern>>,
}

impl ReportPatterns {
    /// Compile the histogram, driver and per-core patterns
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            patterns: vec![
                Box::new(HistogramPattern::new()?),
                Box::new(DriverPattern::new()?),
                Box::new(CorePattern::new()?),
            ],
        })
    }

    /// Apply every pattern to `line`, keeping only actual matches
    pub fn classify(&self, line: &str) -> Vec<LineMatch> {
        self.patterns
            .iter()
            .map(|p| p.match_line(line))
            .filter(|m| *m != LineMatch::NoMatch)
            .collect()
    }
}

/// Accumulate a sequence of report lines into latency data
///
/// Lines that match no pattern are skipped silently.
///
/// # Errors
/// * `ParseError::SampleCapacity` - a histogram bucket is too large to expand
pub fn extract_lines<'a, I>(patterns: &ReportPatterns, lines: I) -> Result<LatencyData, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut data = LatencyData::new();
    let mut line_count = 0usize;

    for line in lines {
        line_count += 1;
        for matched in patterns.classify(line) {
            apply_match(&mut data, matched)?;
        }
    }

    debug!(
        "Scanned {} lines: {} latency samples, {} drivers, {} cores",
        line_count,
        data.samples.len(),
        data.drivers.len(),
        data.cores.len()
    );

    Ok(data)
}

/// Fold one match into the accumulators
fn apply_match(data: &mut LatencyData, matched: LineMatch) -> Result<(), ParseError> {
    match matched {
        LineMatch::Histogram(bucket) => data.add_bucket(&bucket)?,
        LineMatch::Driver(hit) => data.add_driver(&hit),
        LineMatch::Core(usages) => {
            for usage in &usages {
                data.add_core_usage(usage);
            }
        }
        LineMatch::NoMatch => {}
    }
    Ok(())
}

/// Split report text into lines on `\r\n`, `\n` or a bare `\r`
///
/// Blank segments are dropped; they cannot match any pattern.
pub fn report_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents.split(&['\r', '\n'][..]).filter(|line| !line.is_empty())
}

/// Parse an in-memory report
pub fn parse_report(contents: &str) -> Result<LatencyData, ParseError> {
    let patterns = ReportPatterns::new()?;
    extract_lines(&patterns, report_lines(contents))
}

/// Fail with `ParseError::ReportNotFound` unless `path` exists
pub fn ensure_report_exists(path: &Path) -> Result<(), ParseError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ParseError::ReportNotFound(path.to_path_buf()))
    }
}

/// Read and parse a report file
///
/// # Errors
/// * `ParseError::ReportNotFound` - path does not exist
/// * `ParseError::Io` - file could not be read
/// * `ParseError::SampleCapacity` - a histogram bucket is too large to expand
pub fn parse_report_file(path: impl AsRef<Path>) -> Result<LatencyData, ParseError> {
    let path = path.as_ref();

    ensure_report_exists(path)?;

    debug!("Reading report from: {}", path.display());
    let bytes = fs::read(path)?;
    let contents = String::from_utf8_lossy(&bytes);

    parse_report(&contents)
}
