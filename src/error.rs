//! Error handling for sales processing operations.
//!
//! Provides error types with context for batch reading, schema resolution,
//! and report generation failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error in file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Required column '{column}' is missing after header normalization")]
    MissingColumn { column: String },

    #[error("Invalid value '{value}' in column '{column}' at batch row {row}")]
    Value {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Cannot select a maximum from empty '{dimension}' aggregate")]
    EmptyAggregate { dimension: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SalesError {
    /// Create a parse error with file context
    pub fn parse(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create an invalid value error
    pub fn value(column: impl Into<String>, row: usize, value: impl Into<String>) -> Self {
        Self::Value {
            column: column.into(),
            row,
            value: value.into(),
        }
    }

    /// Create an empty aggregate error
    pub fn empty_aggregate(dimension: impl Into<String>) -> Self {
        Self::EmptyAggregate {
            dimension: dimension.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SalesError>;
