use xperf_latency::aggregator::{calculate_latency_statistics, quantile_cut, rank_drivers};
use xperf_latency::parser::{parse_report, DriverTally};
use xperf_latency::utils::StatsError;

#[test]
fn test_single_bucket_statistics() {
    let data = parse_report("Elapsed Time, > 10 usecs AND <= 20 usecs, 5,\n").unwrap();
    assert_eq!(data.samples, vec![15.0; 5]);

    let stats = calculate_latency_statistics(&data.samples).unwrap();
    assert_eq!(format!("{:.2}", stats.max), "15.00");
    assert_eq!(format!("{:.2}", stats.mean), "15.00");
}

#[test]
fn test_statistics_over_histogram() {
    let report = "\
Elapsed Time, >   0 usecs AND <=   10 usecs, 90,
Elapsed Time, >  10 usecs AND <=   20 usecs,  9,
Elapsed Time, > 100 usecs AND <=  200 usecs,  1,
";
    let data = parse_report(report).unwrap();
    let stats = calculate_latency_statistics(&data.samples).unwrap();

    assert_eq!(stats.sample_count, 100);
    assert_eq!(stats.max, 150.0);
    assert_eq!(stats.median, 5.0);
    // position 0.9 * 99 = 89.1 lies between the last 5.0 and the first 15.0
    assert!((stats.p90 - 6.0).abs() < 1e-9);
    assert_eq!(stats.p95, 15.0);
    assert!((stats.mean - (90.0 * 5.0 + 9.0 * 15.0 + 150.0) / 100.0).abs() < 1e-9);
}

#[test]
fn test_percentile_monotonicity() {
    let samples: Vec<f64> = (1..=1000).map(|i| ((i * 7919) % 613) as f64 / 2.0).collect();
    let stats = calculate_latency_statistics(&samples).unwrap();

    assert!(stats.median <= stats.p90);
    assert!(stats.p90 <= stats.p95);
    assert!(stats.p95 <= stats.p99);
    assert!(stats.p99 <= stats.p99_9);
    assert!(stats.p99_9 <= stats.max);
}

#[test]
fn test_two_samples_extreme_cut_stays_in_range() {
    let sorted = [1.0, 2.0];
    for (i, n) in [(9, 10), (19, 20), (99, 100), (999, 1000)] {
        let q = quantile_cut(&sorted, i, n).unwrap();
        assert!((1.0..=2.0).contains(&q));
    }
}

#[test]
fn test_single_sample_is_fatal() {
    let data = parse_report("Elapsed Time, > 4 usecs AND <= 6 usecs, 1,\n").unwrap();
    assert_eq!(
        calculate_latency_statistics(&data.samples),
        Err(StatsError::InsufficientSamples { found: 1 })
    );
}

#[test]
fn test_driver_ranking_order() {
    let mut drivers = DriverTally::new();
    drivers.add("a", 5);
    drivers.add("b", 9);
    drivers.add("c", 1);

    let ranked = rank_drivers(&drivers, 10);
    let names: Vec<&str> = ranked.iter().map(|d| d.driver.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn test_driver_top_ten_truncation() {
    let report: String = (1..=15)
        .map(|i| format!("Total = {} for module drv{}.sys\n", i * 10, i))
        .collect();
    let data = parse_report(&report).unwrap();

    let ranked = rank_drivers(&data.drivers, 10);
    assert_eq!(ranked.len(), 10);
    assert_eq!(ranked[0].driver, "drv15.sys");
    assert_eq!(ranked[9].driver, "drv6.sys");
    assert!(ranked.iter().all(|d| d.occurrences >= 60));
}
