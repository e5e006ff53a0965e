//! Final summary rendering.
//!
//! Reads the finished aggregate state and prints the five summary lines:
//! top product and channel by units, top country and region by revenue, and
//! the per-(product, month) average revenue. Aggregation itself never prints
//! anything here; this module only reads.

use crate::aggregate::RunningAggregates;
use crate::error::{Result, SalesError};
use colored::Colorize;
use indexmap::IndexMap;

/// Select the key with the maximum value; ties resolve to the key that was
/// inserted (first encountered) earliest.
fn top_by<'a, V: PartialOrd + Copy>(
    map: &'a IndexMap<String, V>,
    dimension: &str,
) -> Result<(&'a str, V)> {
    let mut best: Option<(&str, V)> = None;
    for (key, &value) in map {
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((key.as_str(), value)),
        }
    }
    best.ok_or_else(|| SalesError::empty_aggregate(dimension))
}

/// Print the summary report for a completed scan.
///
/// Fails with `EmptyAggregate` when the source contributed no rows.
pub fn print_summary(aggregates: &RunningAggregates) -> Result<()> {
    let (product, product_units) = top_by(&aggregates.product_units, "item_type")?;
    let (channel, channel_units) = top_by(&aggregates.channel_units, "sales_channel")?;
    let (country, country_revenue) = top_by(&aggregates.country_revenue, "country")?;
    let (region, region_revenue) = top_by(&aggregates.region_revenue, "region")?;

    println!();
    println!("{}", "Sales summary".bold().underline());
    println!(
        "Top product:  {} ({} units)",
        product.green().bold(),
        product_units
    );
    println!(
        "Top channel:  {} ({} units)",
        channel.green().bold(),
        channel_units
    );
    println!(
        "Top country:  {} ({:.2} revenue)",
        country.green().bold(),
        country_revenue
    );
    println!(
        "Top region:   {} ({:.2} revenue)",
        region.green().bold(),
        region_revenue
    );

    println!("{}", "Average monthly revenue per product:".bold());
    for ((product, month), average) in aggregates.monthly_averages() {
        println!("  {product} {month}: {average:.2}");
    }

    Ok(())
}
