//! Sales Processor Library
//!
//! A Rust library for computing summary sales statistics from sales
//! transaction CSV files too large to hold in memory at once.
//!
//! This library provides tools for:
//! - Reading a sales CSV in fixed-size sequential batches
//! - Normalizing column headers and resolving a typed column layout
//! - Compacting batches to narrowed numeric, date, and dictionary-encoded
//!   columns
//! - Incrementally merging four dimension sum aggregates and a
//!   (product, month) sum-and-count accumulator across batches
//! - Per-batch resource telemetry and a final human-readable summary

pub mod aggregate;
pub mod batch;
pub mod config;
pub mod error;
pub mod processor;
pub mod reader;
pub mod report;
pub mod schema;
pub mod telemetry;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use aggregate::{MonthKey, MonthlyEntry, RunningAggregates};
pub use config::ProcessorConfig;
pub use error::{Result, SalesError};
pub use processor::{SalesProcessor, ScanStats};
