//! Configuration management and validation.
//!
//! Provides the processing configuration for a single scan run: source file
//! location, batch sizing, and telemetry switches.

use crate::error::{Result, SalesError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of rows fetched per batch
pub const DEFAULT_BATCH_SIZE: usize = 1_000_000;

/// Configuration for a sales processing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Path to the source sales CSV file
    pub file_path: PathBuf,

    /// Maximum number of rows per batch; the last batch may be smaller
    pub batch_size: usize,

    /// Print per-batch resource telemetry to stdout
    pub telemetry: bool,
}

impl ProcessorConfig {
    /// Create a configuration for the given source file with defaults
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            batch_size: DEFAULT_BATCH_SIZE,
            telemetry: true,
        }
    }

    /// Override the batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Disable or enable per-batch telemetry
    pub fn with_telemetry(mut self, telemetry: bool) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Validate the configuration before a run starts
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(SalesError::configuration("batch_size must be positive"));
        }
        if !self.file_path.exists() {
            return Err(SalesError::configuration(format!(
                "source file does not exist: {}",
                self.file_path.display()
            )));
        }
        Ok(())
    }
}
