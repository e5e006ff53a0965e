//! Scan orchestration.
//!
//! Owns the running aggregates for a run's lifetime and drives the
//! per-batch pipeline: read, normalize headers, resolve the column layout,
//! compact, merge, then hand the batch boundary to the resource monitor.
//! Strictly sequential; one batch is fully merged before the next is read.

#[cfg(test)]
mod tests;

use crate::aggregate::RunningAggregates;
use crate::batch::compact_batch;
use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::reader::BatchReader;
use crate::schema::{ColumnLayout, normalize_headers};
use crate::telemetry::ResourceMonitor;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Statistics for one completed scan
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub batches: usize,
    pub rows: usize,
    pub elapsed: Duration,
}

/// Streaming sales statistics processor
#[derive(Debug)]
pub struct SalesProcessor {
    config: ProcessorConfig,
    aggregates: RunningAggregates,
    monitor: ResourceMonitor,
}

impl SalesProcessor {
    pub fn new(config: ProcessorConfig) -> Result<Self> {
        config.validate()?;
        let monitor = ResourceMonitor::new(config.telemetry);
        Ok(Self {
            config,
            aggregates: RunningAggregates::new(),
            monitor,
        })
    }

    /// Run the full scan to completion.
    ///
    /// Aborts on the first fatal error with no partial-result commit; a
    /// re-run starts from an empty state via a fresh processor.
    pub fn run(&mut self) -> Result<ScanStats> {
        let start = Instant::now();
        info!(
            "Scanning {} in batches of {}",
            self.config.file_path.display(),
            self.config.batch_size
        );

        let mut reader = BatchReader::open(&self.config.file_path, self.config.batch_size)?;
        let mut stats = ScanStats::default();

        while let Some(raw) = reader.next_batch()? {
            let batch_start = Instant::now();

            let headers = normalize_headers(&raw.headers);
            let layout = ColumnLayout::resolve(&headers)?;
            let batch = compact_batch(&raw, &headers, &layout)?;

            self.aggregates.merge_batch(&batch);

            stats.batches += 1;
            stats.rows += batch.rows();
            self.monitor
                .observe(batch.index, batch.rows(), batch_start.elapsed());
        }

        stats.elapsed = start.elapsed();
        info!(
            "Scan complete: {} rows in {} batches, {:.2}s",
            stats.rows,
            stats.batches,
            stats.elapsed.as_secs_f64()
        );
        debug!(
            "Distinct keys: {} products, {} channels, {} countries, {} regions, {} product-months",
            self.aggregates.product_units.len(),
            self.aggregates.channel_units.len(),
            self.aggregates.country_revenue.len(),
            self.aggregates.region_revenue.len(),
            self.aggregates.monthly_revenue.len()
        );

        Ok(stats)
    }

    /// Read-only view of the running aggregates
    pub fn aggregates(&self) -> &RunningAggregates {
        &self.aggregates
    }
}
