//! Fatal error paths: configuration, schema, parsing, and empty sources.

use super::end_to_end::{HEADER, write_csv};
use crate::config::ProcessorConfig;
use crate::error::SalesError;
use crate::processor::SalesProcessor;
use crate::report;

#[test]
fn test_missing_required_column_is_fatal() {
    // No Units Sold column
    let file = write_csv(&[
        "Region,Country,Item Type,Sales Channel,Order Date,Ship Date,Total Revenue",
        "Europe,France,Cereal,Online,2021-03-01,2021-03-02,100",
    ]);
    let config = ProcessorConfig::new(file.path()).with_telemetry(false);
    let mut processor = SalesProcessor::new(config).unwrap();

    let err = processor.run().unwrap_err();
    match err {
        SalesError::MissingColumn { column } => assert_eq!(column, "units_sold"),
        other => panic!("unexpected error: {other:?}"),
    }
    // Fatal at first use: nothing was merged
    assert!(processor.aggregates().is_empty());
}

#[test]
fn test_untokenizable_row_is_fatal() {
    let file = write_csv(&[
        HEADER,
        "Europe,France,Cereal,Online,2021-03-01,2021-03-02,1,100",
        "Europe,France,too,few",
    ]);
    let config = ProcessorConfig::new(file.path()).with_telemetry(false);
    let mut processor = SalesProcessor::new(config).unwrap();

    let err = processor.run().unwrap_err();
    assert!(matches!(err, SalesError::Parse { .. }));
}

#[test]
fn test_invalid_units_value_is_fatal() {
    let file = write_csv(&[
        HEADER,
        "Europe,France,Cereal,Online,2021-03-01,2021-03-02,several,100",
    ]);
    let config = ProcessorConfig::new(file.path()).with_telemetry(false);
    let mut processor = SalesProcessor::new(config).unwrap();

    let err = processor.run().unwrap_err();
    assert!(matches!(err, SalesError::Value { .. }));
}

#[test]
fn test_empty_source_scans_but_fails_at_report_time() {
    let file = write_csv(&[HEADER]);
    let config = ProcessorConfig::new(file.path()).with_telemetry(false);
    let mut processor = SalesProcessor::new(config).unwrap();

    // Scan of a header-only file completes with zero batches
    let stats = processor.run().unwrap();
    assert_eq!(stats.batches, 0);
    assert_eq!(stats.rows, 0);

    // Selecting a maximum from the empty aggregates is the fatal step
    let err = report::print_summary(processor.aggregates()).unwrap_err();
    assert!(matches!(err, SalesError::EmptyAggregate { .. }));
}

#[test]
fn test_nonexistent_file_rejected_at_construction() {
    let config = ProcessorConfig::new("no/such/file.csv");
    assert!(matches!(
        SalesProcessor::new(config),
        Err(SalesError::Configuration { .. })
    ));
}
