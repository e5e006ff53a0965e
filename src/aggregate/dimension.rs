//! Four-way dimension sum merge: product/channel units, country/region
//! revenue. Grouping happens per batch on dictionary codes; codes resolve
//! to owned strings only when a group's sum meets the running map.

use super::RunningAggregates;
use crate::batch::{CategoricalColumn, CompactBatch, FloatColumn, IntColumn};
use indexmap::IndexMap;

pub(super) fn merge(agg: &mut RunningAggregates, batch: &CompactBatch) {
    merge_units(&mut agg.product_units, batch.item_type(), batch.units_sold());
    merge_units(
        &mut agg.channel_units,
        batch.sales_channel(),
        batch.units_sold(),
    );
    merge_revenue(
        &mut agg.country_revenue,
        batch.country(),
        batch.total_revenue(),
    );
    merge_revenue(
        &mut agg.region_revenue,
        batch.region(),
        batch.total_revenue(),
    );
}

fn merge_units(totals: &mut IndexMap<String, i64>, keys: &CategoricalColumn, values: &IntColumn) {
    // Every dictionary code appears in at least one row, so a dense per-code
    // accumulator covers exactly the batch's groups.
    let mut per_code = vec![0i64; keys.dictionary_len()];
    for row in 0..keys.len() {
        per_code[keys.code(row) as usize] += values.get(row);
    }
    for (code, sum) in per_code.into_iter().enumerate() {
        *totals.entry(keys.value(code as u32).to_string()).or_insert(0) += sum;
    }
}

fn merge_revenue(
    totals: &mut IndexMap<String, f64>,
    keys: &CategoricalColumn,
    values: &FloatColumn,
) {
    let mut per_code = vec![0f64; keys.dictionary_len()];
    for row in 0..keys.len() {
        per_code[keys.code(row) as usize] += values.get(row);
    }
    for (code, sum) in per_code.into_iter().enumerate() {
        *totals
            .entry(keys.value(code as u32).to_string())
            .or_insert(0.0) += sum;
    }
}
