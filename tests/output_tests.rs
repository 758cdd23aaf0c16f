use pretty_assertions::assert_eq;
use xperf_latency::aggregator::calculate_latency_statistics;
use xperf_latency::output::{format_report, read_summary, render_report, write_report, write_summary, LatencySummaryReport};
use xperf_latency::parser::parse_report;

#[test]
fn test_no_latency_data_report() {
    let data = parse_report("Total = 3 for module foo.sys\nCPU 0 Usage, 1%, 9 usec,\n").unwrap();
    let report = render_report(&data, 10).unwrap();

    assert_eq!(report, "\n===== LATENCY RESULTS =====\nNo latency data found.\n");
    assert!(!report.contains("Highest"));
    assert!(!report.contains("DRIVER"));
}

#[test]
fn test_driver_section_accumulated_count() {
    let data = parse_report(
        "Elapsed Time, > 10 usecs AND <= 20 usecs, 5,\n\
         Total = 3 for module foo.sys\n\
         Total = 7 for module foo.sys\n",
    )
    .unwrap();
    let report = render_report(&data, 10).unwrap();

    assert!(report.contains("Highest measured interrupt to process latency: 15.00 µs\n"));
    assert!(report.contains("Average measured interrupt to process latency: 15.00 µs\n"));
    assert!(report.ends_with("===== DRIVER LATENCY CONTRIBUTION =====\nfoo.sys: 10 occurrences\n"));
}

#[test]
fn test_driver_section_top_ten_only() {
    let mut input = String::from("Elapsed Time, > 0 usecs AND <= 2 usecs, 3,\n");
    for i in 1..=15 {
        input.push_str(&format!("Total = {} for module m{}.sys\n", i, i));
    }
    let data = parse_report(&input).unwrap();
    let report = render_report(&data, 10).unwrap();

    let driver_lines: Vec<&str> = report
        .lines()
        .filter(|l| l.ends_with(" occurrences"))
        .collect();

    assert_eq!(driver_lines.len(), 10);
    assert_eq!(driver_lines[0], "m15.sys: 15 occurrences");
    assert_eq!(driver_lines[9], "m6.sys: 6 occurrences");
}

#[test]
fn test_statistics_formatted_two_decimals() {
    let data = parse_report(
        "Elapsed Time, > 0 usecs AND <= 1 usecs, 2,\nElapsed Time, > 1 usecs AND <= 2 usecs, 1,\n",
    )
    .unwrap();
    let stats = calculate_latency_statistics(&data.samples).unwrap();
    let report = format_report(Some(&stats), &[]);

    // samples: 0.5, 0.5, 1.5
    assert!(report.contains("Highest measured interrupt to process latency: 1.50 µs\n"));
    assert!(report.contains("Average measured interrupt to process latency: 0.83 µs\n"));
    assert!(report.contains("Median interrupt to process latency: 0.50 µs\n"));
    assert!(report.contains("Standard Deviation: 0.58 µs\n"));
    assert!(report.contains("No driver latency data found.\n"));
}

#[test]
fn test_write_report_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    write_report("\n===== LATENCY RESULTS =====\nNo latency data found.\n", &path).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "\n===== LATENCY RESULTS =====\nNo latency data found.\n"
    );
}

#[test]
fn test_write_report_rejects_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(write_report("x", dir.path()).is_err());
}

#[test]
fn test_json_summary_round_trip_with_statistics() {
    let data = parse_report(
        "Elapsed Time, > 10 usecs AND <= 20 usecs, 5,\nTotal = 2 for module a.sys\n",
    )
    .unwrap();
    let stats = calculate_latency_statistics(&data.samples).unwrap();
    let summary = LatencySummaryReport::new("trace.txt", &data, Some(stats), 10);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/summary.json");
    write_summary(&summary, &path).unwrap();

    let loaded = read_summary(&path).unwrap();
    assert_eq!(loaded.report_file, "trace.txt");
    assert_eq!(loaded.sample_count, 5);
    assert_eq!(loaded.statistics.unwrap().max, 15.0);
    assert_eq!(loaded.top_drivers[0].driver, "a.sys");
}
