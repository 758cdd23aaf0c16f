//! XPerf Latency
//!
//! Latency statistics and driver attribution from XPerf DPC/ISR
//! text reports.
//!
//! This crate provides the core implementation for the
//! `xperf-latency` CLI tool: report parsing, statistics, and
//! report rendering.
//!
//! ## Getting Started
//!
//! ```bash
//! xperf-latency report.txt latency_results.txt
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
