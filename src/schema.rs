//! Header normalization and typed column resolution.
//!
//! Column identifiers are canonicalized once per batch (trim, internal
//! whitespace to underscores, lowercase), then the required columns are
//! resolved by name into a [`ColumnLayout`] so downstream grouping never
//! does late name lookups.

use crate::error::{Result, SalesError};

/// Required group-by and value columns, post-normalization
pub const COL_ITEM_TYPE: &str = "item_type";
pub const COL_SALES_CHANNEL: &str = "sales_channel";
pub const COL_COUNTRY: &str = "country";
pub const COL_REGION: &str = "region";
pub const COL_UNITS_SOLD: &str = "units_sold";
pub const COL_TOTAL_REVENUE: &str = "total_revenue";
pub const COL_ORDER_DATE: &str = "order_date";
pub const COL_SHIP_DATE: &str = "ship_date";

/// All columns the aggregation path depends on
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_ITEM_TYPE,
    COL_SALES_CHANNEL,
    COL_COUNTRY,
    COL_REGION,
    COL_UNITS_SOLD,
    COL_TOTAL_REVENUE,
    COL_ORDER_DATE,
    COL_SHIP_DATE,
];

/// Canonicalize a single column identifier.
///
/// Strips leading/trailing whitespace, replaces each internal whitespace
/// character with an underscore, and lowercases. Idempotent: normalizing an
/// already-normalized name is a no-op.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .flat_map(|c| {
            if c.is_whitespace() {
                vec!['_']
            } else {
                c.to_lowercase().collect()
            }
        })
        .collect()
}

/// Normalize every header in a batch
pub fn normalize_headers(raw: &[String]) -> Vec<String> {
    raw.iter().map(|h| normalize_column_name(h)).collect()
}

/// Indices of the required columns within a normalized header row.
///
/// Resolved once per batch; extra columns keep their positions and are
/// compacted but never consulted by aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub item_type: usize,
    pub sales_channel: usize,
    pub country: usize,
    pub region: usize,
    pub units_sold: usize,
    pub total_revenue: usize,
    pub order_date: usize,
    pub ship_date: usize,
}

impl ColumnLayout {
    /// Resolve required column indices from normalized headers
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| SalesError::missing_column(name))
        };

        Ok(Self {
            item_type: find(COL_ITEM_TYPE)?,
            sales_channel: find(COL_SALES_CHANNEL)?,
            country: find(COL_COUNTRY)?,
            region: find(COL_REGION)?,
            units_sold: find(COL_UNITS_SOLD)?,
            total_revenue: find(COL_TOTAL_REVENUE)?,
            order_date: find(COL_ORDER_DATE)?,
            ship_date: find(COL_SHIP_DATE)?,
        })
    }

    /// Whether the column at `index` is one of the required columns
    pub fn is_required(&self, index: usize) -> bool {
        index == self.item_type
            || index == self.sales_channel
            || index == self.country
            || index == self.region
            || index == self.units_sold
            || index == self.total_revenue
            || index == self.order_date
            || index == self.ship_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_trims_lowercases_and_underscores() {
        assert_eq!(normalize_column_name("Order Date"), "order_date");
        assert_eq!(normalize_column_name("  Total Revenue "), "total_revenue");
        assert_eq!(normalize_column_name("REGION"), "region");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_column_name("Sales Channel");
        let twice = normalize_column_name(&once);
        assert_eq!(once, "sales_channel");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_layout_resolves_required_columns() {
        let headers = normalize_headers(&[
            "Region".to_string(),
            "Country".to_string(),
            "Item Type".to_string(),
            "Sales Channel".to_string(),
            "Order Date".to_string(),
            "Ship Date".to_string(),
            "Units Sold".to_string(),
            "Total Revenue".to_string(),
            "Order ID".to_string(),
        ]);

        let layout = ColumnLayout::resolve(&headers).unwrap();
        assert_eq!(layout.region, 0);
        assert_eq!(layout.item_type, 2);
        assert_eq!(layout.total_revenue, 7);
        assert!(layout.is_required(4));
        assert!(!layout.is_required(8));
    }

    #[test]
    fn test_layout_reports_missing_column() {
        let headers = vec!["region".to_string(), "country".to_string()];
        let err = ColumnLayout::resolve(&headers).unwrap_err();
        match err {
            SalesError::MissingColumn { column } => assert_eq!(column, "item_type"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
