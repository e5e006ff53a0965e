//! End-to-end scan scenarios against real files.

use crate::aggregate::MonthKey;
use crate::config::ProcessorConfig;
use crate::processor::SalesProcessor;
use std::io::Write;
use tempfile::NamedTempFile;

pub(super) fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

pub(super) const HEADER: &str =
    "Region,Country,Item Type,Sales Channel,Order Date,Ship Date,Units Sold,Total Revenue";

pub(super) const SCENARIO_ROWS: &[&str] = &[
    "South America,Brazil,Electronics,Online,2021-01-05,2021-01-10,10,100",
    "South America,Brazil,Electronics,Online,2021-01-20,2021-01-25,5,50",
    "North America,USA,Furniture,Retail,2021-02-10,2021-02-15,20,500",
];

fn scenario_file() -> NamedTempFile {
    let mut lines = vec![HEADER];
    lines.extend_from_slice(SCENARIO_ROWS);
    write_csv(&lines)
}

#[test]
fn test_full_scenario_in_one_batch() {
    let file = scenario_file();
    let config = ProcessorConfig::new(file.path()).with_telemetry(false);
    let mut processor = SalesProcessor::new(config).unwrap();

    let stats = processor.run().unwrap();
    assert_eq!(stats.batches, 1);
    assert_eq!(stats.rows, 3);

    let agg = processor.aggregates();
    assert_eq!(agg.product_units["Electronics"], 15);
    assert_eq!(agg.product_units["Furniture"], 20);
    assert_eq!(agg.channel_units["Online"], 15);
    assert_eq!(agg.channel_units["Retail"], 20);
    assert_eq!(agg.country_revenue["Brazil"], 150.0);
    assert_eq!(agg.country_revenue["USA"], 500.0);
    assert_eq!(agg.region_revenue["South America"], 150.0);
    assert_eq!(agg.region_revenue["North America"], 500.0);

    let averages = agg.monthly_averages();
    let jan = MonthKey::Month {
        year: 2021,
        month: 1,
    };
    let feb = MonthKey::Month {
        year: 2021,
        month: 2,
    };
    assert_eq!(averages[&("Electronics".to_string(), jan)], 150.0);
    assert_eq!(averages[&("Furniture".to_string(), feb)], 500.0);
}

#[test]
fn test_rerun_is_idempotent() {
    let file = scenario_file();

    let run = || {
        let config = ProcessorConfig::new(file.path())
            .with_batch_size(2)
            .with_telemetry(false);
        let mut processor = SalesProcessor::new(config).unwrap();
        processor.run().unwrap();
        processor.aggregates().clone()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}

#[test]
fn test_extra_columns_are_tolerated() {
    let file = write_csv(&[
        "Order ID,Region,Country,Item Type,Sales Channel,Order Date,Ship Date,Units Sold,Total Revenue,Order Priority",
        "1,Europe,France,Snacks,Online,2021-03-01,2021-03-02,4,40,H",
        "2,Europe,France,Snacks,Online,2021-03-05,2021-03-06,6,60,L",
    ]);
    let config = ProcessorConfig::new(file.path()).with_telemetry(false);
    let mut processor = SalesProcessor::new(config).unwrap();
    processor.run().unwrap();

    let agg = processor.aggregates();
    assert_eq!(agg.product_units["Snacks"], 10);
    assert_eq!(agg.country_revenue["France"], 100.0);
}

#[test]
fn test_messy_headers_normalize() {
    let file = write_csv(&[
        " REGION , Country ,ITEM TYPE,Sales Channel,Order Date,Ship Date,Units Sold,Total Revenue",
        "Asia,Japan,Cereal,Offline,2021-04-01,2021-04-03,7,70",
    ]);
    let config = ProcessorConfig::new(file.path()).with_telemetry(false);
    let mut processor = SalesProcessor::new(config).unwrap();
    processor.run().unwrap();

    let agg = processor.aggregates();
    assert_eq!(agg.region_revenue["Asia"], 70.0);
    assert_eq!(agg.channel_units["Offline"], 7);
}

#[test]
fn test_unknown_month_bucket_end_to_end() {
    let file = write_csv(&[
        HEADER,
        "Europe,Spain,Cereal,Online,garbage-date,2021-05-02,2,200",
        "Europe,Spain,Cereal,Online,2021-05-01,2021-05-02,3,300",
    ]);
    let config = ProcessorConfig::new(file.path()).with_telemetry(false);
    let mut processor = SalesProcessor::new(config).unwrap();
    processor.run().unwrap();

    let averages = processor.aggregates().monthly_averages();
    let may = MonthKey::Month {
        year: 2021,
        month: 5,
    };
    assert_eq!(averages[&("Cereal".to_string(), MonthKey::Unknown)], 200.0);
    assert_eq!(averages[&("Cereal".to_string(), may)], 300.0);
    // The malformed-date row still counts toward dimension totals
    assert_eq!(processor.aggregates().country_revenue["Spain"], 500.0);
}
