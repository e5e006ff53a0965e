//! Running aggregate state and per-batch merge operations.
//!
//! The four dimension mappings are pure commutative sum merges: any batch
//! partition or processing order yields identical totals. The monthly
//! mapping is deliberately different — its denominator counts batches, not
//! rows, so its final averages depend on the batch size. That behavior is
//! preserved exactly, not corrected.

mod dimension;
mod monthly;

use crate::batch::CompactBatch;
use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use std::fmt;

/// Year-month grouping key derived from order_date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MonthKey {
    Month { year: i32, month: u32 },
    /// Rows whose order_date failed to parse
    Unknown,
}

impl MonthKey {
    pub fn from_date(date: Option<NaiveDate>) -> Self {
        match date {
            Some(date) => Self::Month {
                year: date.year(),
                month: date.month(),
            },
            None => Self::Unknown,
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month { year, month } => write!(f, "{year:04}-{month:02}"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Running (sum, batch-count) pair for one (product, month) key
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthlyEntry {
    /// Sum of per-batch group sums
    pub sum: f64,
    /// Number of batches in which the key appeared at least once
    pub batches: u64,
}

impl MonthlyEntry {
    pub fn average(&self) -> f64 {
        self.sum / self.batches as f64
    }
}

/// Process-scoped aggregate state, owned by the processor for the run's
/// lifetime and read-only once exposed to the reporter.
///
/// Insertion order (first encounter) is preserved in every mapping so that
/// max-by-value tie-breaks are deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunningAggregates {
    /// item_type → total units_sold
    pub product_units: IndexMap<String, i64>,
    /// sales_channel → total units_sold
    pub channel_units: IndexMap<String, i64>,
    /// country → total total_revenue
    pub country_revenue: IndexMap<String, f64>,
    /// region → total total_revenue
    pub region_revenue: IndexMap<String, f64>,
    /// (item_type, month) → (sum of per-batch sums, batch count)
    pub monthly_revenue: IndexMap<(String, MonthKey), MonthlyEntry>,
}

impl RunningAggregates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one compacted batch into the running state
    pub fn merge_batch(&mut self, batch: &CompactBatch) {
        dimension::merge(self, batch);
        monthly::merge(self, batch);
    }

    /// Final (product, month) → average mapping, in insertion order
    pub fn monthly_averages(&self) -> IndexMap<(String, MonthKey), f64> {
        self.monthly_revenue
            .iter()
            .map(|(key, entry)| (key.clone(), entry.average()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.product_units.is_empty()
            && self.channel_units.is_empty()
            && self.country_revenue.is_empty()
            && self.region_revenue.is_empty()
            && self.monthly_revenue.is_empty()
    }
}
