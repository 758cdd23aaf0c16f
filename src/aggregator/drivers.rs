//! Driver contribution ranking.

use crate::parser::schema::{CoreContribution, CoreTally, DriverContribution, DriverTally};
use log::debug;

/// Rank drivers by occurrence count, highest first, keeping the top `top_n`
///
/// **Public** - main entry point for driver ranking
///
/// The sort is stable, so drivers with equal counts stay in the order they
/// were first seen in the report.
pub fn rank_drivers(drivers: &DriverTally, top_n: usize) -> Vec<DriverContribution> {
    debug!("Ranking top {} of {} drivers", top_n, drivers.len());

    let mut ranked: Vec<DriverContribution> = drivers
        .iter()
        .map(|(driver, occurrences)| DriverContribution {
            driver: driver.to_string(),
            occurrences,
        })
        .collect();

    ranked.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
    ranked.truncate(top_n);

    ranked
}

/// Per-core usage in discovery order
pub fn core_contributions(cores: &CoreTally) -> Vec<CoreContribution> {
    cores
        .iter()
        .map(|(core, usage_usec)| CoreContribution {
            core: core.to_string(),
            usage_usec,
        })
        .collect()
}
