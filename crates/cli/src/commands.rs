use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use larder_inventory::shelf_life;
use larder_inventory::{
    ExpiryClassifier, InventoryItem, days_remaining, parse_snapshot, waste_report,
};

use crate::app::ShelfLifeCommand;
use crate::config::Settings;
use crate::output::{self, render};

/// Read and decode a snapshot from `path` (`-` means stdin).
pub fn load_snapshot(path: &Path) -> Result<Vec<InventoryItem>> {
    let json = if path == Path::new("-") {
        tracing::debug!("reading snapshot from stdin");
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read snapshot from stdin")?;
        buf
    } else {
        tracing::debug!(path = %path.display(), "reading snapshot");
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?
    };

    let items = parse_snapshot(&json)
        .with_context(|| format!("invalid snapshot {}", path.display()))?;
    tracing::debug!(items = items.len(), "decoded snapshot");
    Ok(items)
}

pub fn classify_command(
    path: &Path,
    include_consumed: bool,
    settings: &Settings,
) -> Result<String> {
    let mut items = load_snapshot(path)?;
    if !include_consumed {
        let before = items.len();
        items.retain(|item| !item.consumed);
        tracing::debug!(skipped = before - items.len(), "dropped consumed items");
    }

    let classifier = ExpiryClassifier::new(settings.policy);
    let inventory = classifier.classify_snapshot(&items, settings.today);

    tracing::info!(
        today = %settings.today,
        items = inventory.items.len(),
        fresh = inventory.summary.fresh_count,
        expiring = inventory.summary.expiring_count,
        expired = inventory.summary.expired_count,
        "classified snapshot"
    );

    render(settings.format, &inventory, output::classified_text)
}

pub fn expiring_command(path: &Path, within: i64, settings: &Settings) -> Result<String> {
    let items = load_snapshot(path)?;
    let classifier = ExpiryClassifier::new(settings.policy);
    let hits = classifier.expiring_within(&items, settings.today, within);

    tracing::info!(today = %settings.today, within, hits = hits.len(), "expiring items");

    render(settings.format, &hits, |v| output::items_text(v))
}

pub fn waste_command(path: &Path, settings: &Settings) -> Result<String> {
    let items = load_snapshot(path)?;
    let report = waste_report(&items, settings.today);

    tracing::info!(
        total = report.total_items,
        wasted = report.wasted_items,
        "computed waste report"
    );

    render(settings.format, &report, output::waste_text)
}

/// Expiry estimate for a new purchase, as reported by `shelf-life estimate`.
#[derive(Debug, Clone, Serialize)]
pub struct ExpiryEstimate {
    pub name: String,
    pub category: String,
    pub purchase_date: chrono::NaiveDate,
    pub expiry_date: chrono::NaiveDate,
    pub days_remaining: i64,
    pub warning: bool,
}

fn estimate_text(e: &ExpiryEstimate) -> String {
    let mut text = format!(
        "{} ({}): bought {}, expires {}",
        e.name, e.category, e.purchase_date, e.expiry_date
    );
    if e.warning {
        text.push_str(&format!(
            "\nwarning: {} expires in {} days",
            e.name, e.days_remaining
        ));
    }
    text
}

pub fn shelf_life_command(cmd: &ShelfLifeCommand, settings: &Settings) -> Result<String> {
    match cmd {
        ShelfLifeCommand::Estimate {
            category,
            name,
            purchased,
        } => {
            let expiry_date = shelf_life::estimate_expiry(category, name, *purchased);
            let days = days_remaining(expiry_date, settings.today);
            let estimate = ExpiryEstimate {
                name: name.clone(),
                category: category.clone(),
                purchase_date: *purchased,
                expiry_date,
                days_remaining: days,
                warning: settings.policy.warrants_warning(days),
            };
            if estimate.warning {
                tracing::warn!(item = %name, days_remaining = days, "item expires soon");
            }
            render(settings.format, &estimate, estimate_text)
        }
        ShelfLifeCommand::Search { query } => {
            let foods = shelf_life::search(query);
            render(settings.format, &foods, |v| output::foods_text(v))
        }
        ShelfLifeCommand::Lookup { food } => {
            let found = shelf_life::lookup(food)?;
            render(settings.format, &found, output::food_line)
        }
    }
}
