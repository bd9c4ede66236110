//! Output formatting for CLI commands

use anyhow::Result;
use serde::Serialize;

use larder_inventory::{
    ClassifiedInventory, ClassifiedItem, ExpiryLabel, FoodShelfLife, InventorySummary, WasteReport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render `value` as pretty JSON, or with `text` in text mode.
pub fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text(value)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

pub fn item_line(c: &ClassifiedItem) -> String {
    format!(
        "{:<8} {:<20} {} x{} [{}] expires {}",
        c.status.as_str(),
        ExpiryLabel::for_days(c.days_remaining).to_string(),
        c.item.name,
        c.item.quantity,
        c.item.category,
        c.item.expiry_date,
    )
}

pub fn summary_line(s: &InventorySummary) -> String {
    format!(
        "fresh: {}  expiring: {}  expired: {}",
        s.fresh_count, s.expiring_count, s.expired_count
    )
}

pub fn classified_text(inv: &ClassifiedInventory) -> String {
    let mut lines: Vec<String> = inv.items.iter().map(item_line).collect();
    if lines.is_empty() {
        lines.push("No items in inventory".to_string());
    }
    lines.push(summary_line(&inv.summary));
    lines.join("\n")
}

pub fn items_text(items: &[ClassifiedItem]) -> String {
    if items.is_empty() {
        return "Nothing expiring".to_string();
    }
    items.iter().map(item_line).collect::<Vec<_>>().join("\n")
}

pub fn waste_text(report: &WasteReport) -> String {
    let mut lines = vec![format!(
        "total: {}  consumed: {}  wasted: {} ({:.1}%)",
        report.total_items, report.consumed_items, report.wasted_items, report.waste_percentage
    )];
    for (category, w) in &report.categories {
        lines.push(format!(
            "  {category:<10} total {:>3}  consumed {:>3}  wasted {:>3}",
            w.total, w.consumed, w.wasted
        ));
    }
    lines.join("\n")
}

pub fn foods_text(foods: &[FoodShelfLife]) -> String {
    if foods.is_empty() {
        return "No matching foods".to_string();
    }
    foods.iter().map(food_line).collect::<Vec<_>>().join("\n")
}

pub fn food_line(f: &FoodShelfLife) -> String {
    format!("{:<10} {:<10} {} days", f.name, f.category, f.typical_expiry_days)
}
