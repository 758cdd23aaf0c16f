//! Output writers for latency reports.
//!
//! This module handles writing data to disk in two formats:
//! - The fixed-layout text report
//! - An optional JSON summary

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_summary, write_summary, LatencySummaryReport};
pub use text::{format_report, render_report, write_report};
