//! Per-batch compaction of raw string records into typed columns.

use super::column::{CategoricalColumn, Column, DateColumn, FloatColumn, IntColumn};
use crate::error::{Result, SalesError};
use crate::reader::RawBatch;
use crate::schema::ColumnLayout;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Date formats accepted for order/ship dates, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// One batch after normalization and compaction.
///
/// The required columns are typed fields; every other source column is kept
/// in `extras` with an inferred class. Dictionary codes are valid only
/// within this batch.
#[derive(Debug, Clone)]
pub struct CompactBatch {
    /// 1-based ordinal of this batch within the scan
    pub index: usize,
    rows: usize,
    item_type: CategoricalColumn,
    sales_channel: CategoricalColumn,
    country: CategoricalColumn,
    region: CategoricalColumn,
    units_sold: IntColumn,
    total_revenue: FloatColumn,
    order_date: DateColumn,
    ship_date: DateColumn,
    extras: Vec<(String, Column)>,
}

impl CompactBatch {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn item_type(&self) -> &CategoricalColumn {
        &self.item_type
    }

    pub fn sales_channel(&self) -> &CategoricalColumn {
        &self.sales_channel
    }

    pub fn country(&self) -> &CategoricalColumn {
        &self.country
    }

    pub fn region(&self) -> &CategoricalColumn {
        &self.region
    }

    pub fn units_sold(&self) -> &IntColumn {
        &self.units_sold
    }

    pub fn total_revenue(&self) -> &FloatColumn {
        &self.total_revenue
    }

    pub fn order_date(&self) -> &DateColumn {
        &self.order_date
    }

    pub fn ship_date(&self) -> &DateColumn {
        &self.ship_date
    }

    /// Extra (non-required) columns, compacted but unused by aggregation
    pub fn extras(&self) -> &[(String, Column)] {
        &self.extras
    }
}

/// Compact a raw batch into typed columns.
///
/// `headers` must already be normalized and `layout` resolved against them.
pub fn compact_batch(
    raw: &RawBatch,
    headers: &[String],
    layout: &ColumnLayout,
) -> Result<CompactBatch> {
    let rows = raw.len();

    let item_type = categorical_at(raw, layout.item_type);
    let sales_channel = categorical_at(raw, layout.sales_channel);
    let country = categorical_at(raw, layout.country);
    let region = categorical_at(raw, layout.region);

    let units_sold = int_at(raw, layout.units_sold, &headers[layout.units_sold])?;
    let total_revenue = float_at(raw, layout.total_revenue, &headers[layout.total_revenue])?;

    let order_date = date_at(raw, layout.order_date, &headers[layout.order_date]);
    let ship_date = date_at(raw, layout.ship_date, &headers[layout.ship_date]);

    let mut extras = Vec::new();
    for (index, name) in headers.iter().enumerate() {
        if layout.is_required(index) {
            continue;
        }
        extras.push((name.clone(), infer_extra(raw, index)));
    }

    debug!(
        "Compacted batch {}: {} rows, units width {} bits, revenue width {} bits, {} null order dates",
        raw.index,
        rows,
        units_sold.width_bits(),
        total_revenue.width_bits(),
        order_date.null_count(),
    );

    Ok(CompactBatch {
        index: raw.index,
        rows,
        item_type,
        sales_channel,
        country,
        region,
        units_sold,
        total_revenue,
        order_date,
        ship_date,
        extras,
    })
}

fn cell<'a>(raw: &'a RawBatch, row: usize, col: usize) -> &'a str {
    raw.rows[row].get(col).unwrap_or("")
}

fn categorical_at(raw: &RawBatch, col: usize) -> CategoricalColumn {
    CategoricalColumn::from_values((0..raw.len()).map(|row| cell(raw, row, col)))
}

fn int_at(raw: &RawBatch, col: usize, name: &str) -> Result<IntColumn> {
    let mut values = Vec::with_capacity(raw.len());
    for row in 0..raw.len() {
        let text = cell(raw, row, col).trim();
        let parsed = text
            .parse::<i64>()
            .map_err(|_| SalesError::value(name, row, text))?;
        values.push(parsed);
    }
    Ok(IntColumn::from_values(values))
}

fn float_at(raw: &RawBatch, col: usize, name: &str) -> Result<FloatColumn> {
    let mut values = Vec::with_capacity(raw.len());
    for row in 0..raw.len() {
        let text = cell(raw, row, col).trim();
        let parsed = text
            .parse::<f64>()
            .map_err(|_| SalesError::value(name, row, text))?;
        values.push(parsed);
    }
    Ok(FloatColumn::from_values(values))
}

/// Parse a date column, coercing unparseable values to null.
///
/// Coercion is non-fatal: the row proceeds through grouping under the
/// unknown-month bucket.
fn date_at(raw: &RawBatch, col: usize, name: &str) -> DateColumn {
    let mut values = Vec::with_capacity(raw.len());
    let mut coerced = 0usize;
    for row in 0..raw.len() {
        let text = cell(raw, row, col).trim();
        let parsed = parse_date(text);
        if parsed.is_none() && !text.is_empty() {
            coerced += 1;
        }
        values.push(parsed);
    }
    if coerced > 0 {
        warn!(
            "Coerced {} unparseable value(s) in column '{}' of batch {} to null dates",
            coerced, name, raw.index
        );
    }
    DateColumn::new(values)
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Infer the class of a non-required column for this batch: all-integer,
/// else all-numeric, else categorical. Mirrors how the source data would
/// load under dtype inference.
fn infer_extra(raw: &RawBatch, col: usize) -> Column {
    let mut ints = Vec::with_capacity(raw.len());
    let mut all_int = true;
    for row in 0..raw.len() {
        match cell(raw, row, col).trim().parse::<i64>() {
            Ok(v) => ints.push(v),
            Err(_) => {
                all_int = false;
                break;
            }
        }
    }
    if all_int && !raw.is_empty() {
        return Column::Int(IntColumn::from_values(ints));
    }

    let mut floats = Vec::with_capacity(raw.len());
    let mut all_float = true;
    for row in 0..raw.len() {
        match cell(raw, row, col).trim().parse::<f64>() {
            Ok(v) => floats.push(v),
            Err(_) => {
                all_float = false;
                break;
            }
        }
    }
    if all_float && !raw.is_empty() {
        return Column::Float(FloatColumn::from_values(floats));
    }

    Column::Categorical(categorical_at(raw, col))
}
