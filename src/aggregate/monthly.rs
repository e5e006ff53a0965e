//! (product, month) sum-and-count accumulator.
//!
//! The count is incremented once per batch per key, regardless of how many
//! rows of that key the batch held. The resulting average is therefore the
//! mean of per-batch partial sums, not a per-row mean, and changes with the
//! batch size. That is the contract; do not switch the denominator to rows.

use super::{MonthKey, RunningAggregates};
use crate::batch::CompactBatch;
use indexmap::IndexMap;

pub(super) fn merge(agg: &mut RunningAggregates, batch: &CompactBatch) {
    let items = batch.item_type();
    let dates = batch.order_date();
    let revenue = batch.total_revenue();

    // Group within the batch by (item code, month) first; batch-local codes
    // keep the grouping key cheap until merge time.
    let mut groups: IndexMap<(u32, MonthKey), f64> = IndexMap::new();
    for row in 0..batch.rows() {
        let key = (items.code(row), MonthKey::from_date(dates.get(row)));
        *groups.entry(key).or_insert(0.0) += revenue.get(row);
    }

    for ((code, month), sum) in groups {
        let entry = agg
            .monthly_revenue
            .entry((items.value(code).to_string(), month))
            .or_default();
        entry.sum += sum;
        entry.batches += 1;
    }
}
