//! Food-waste analytics over a user's full item history.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::expiry::days_remaining;
use crate::item::InventoryItem;

/// Per-category tallies.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWaste {
    pub total: usize,
    pub consumed: usize,
    pub wasted: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteReport {
    pub total_items: usize,
    pub consumed_items: usize,
    pub wasted_items: usize,
    pub waste_percentage: f64,
    pub categories: BTreeMap<String, CategoryWaste>,
}

/// Build a waste report as of `today`.
///
/// An item is wasted when it was never consumed and its date has come
/// (`days_remaining <= 0`). Consumed items are never wasted, even if they
/// are past their date now.
pub fn waste_report(items: &[InventoryItem], today: NaiveDate) -> WasteReport {
    let mut consumed_items = 0;
    let mut wasted_items = 0;
    let mut categories: BTreeMap<String, CategoryWaste> = BTreeMap::new();

    for item in items {
        let entry = categories.entry(item.category.clone()).or_default();
        entry.total += 1;

        if item.consumed {
            consumed_items += 1;
            entry.consumed += 1;
        } else if days_remaining(item.expiry_date, today) <= 0 {
            wasted_items += 1;
            entry.wasted += 1;
        }
    }

    let total_items = items.len();
    let waste_percentage = if total_items == 0 {
        0.0
    } else {
        wasted_items as f64 / total_items as f64 * 100.0
    };

    WasteReport {
        total_items,
        consumed_items,
        wasted_items,
        waste_percentage,
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn item(id: i64, category: &str, expiry_offset: i64, consumed: bool) -> InventoryItem {
        let t = today();
        let expiry = if expiry_offset >= 0 {
            t + Days::new(expiry_offset as u64)
        } else {
            t - Days::new(expiry_offset.unsigned_abs())
        };
        InventoryItem::new(id, "thing", 1, category, t, expiry)
            .unwrap()
            .with_consumed(consumed)
    }

    #[test]
    fn empty_history_has_no_waste() {
        let report = waste_report(&[], today());
        assert_eq!(report.total_items, 0);
        assert_eq!(report.waste_percentage, 0.0);
        assert!(report.categories.is_empty());
    }

    #[test]
    fn consumed_and_wasted_are_disjoint() {
        let items = vec![
            item(1, "dairy", -3, true),
            item(2, "dairy", -1, false),
            item(3, "dairy", 0, false),
            item(4, "produce", 5, false),
        ];

        let report = waste_report(&items, today());

        assert_eq!(report.total_items, 4);
        assert_eq!(report.consumed_items, 1);
        assert_eq!(report.wasted_items, 2);
        assert_eq!(report.waste_percentage, 50.0);
        assert_eq!(
            report.categories["dairy"],
            CategoryWaste {
                total: 3,
                consumed: 1,
                wasted: 2,
            }
        );
        assert_eq!(report.categories["produce"].wasted, 0);
    }

    #[test]
    fn categories_are_sorted_by_name() {
        let items = vec![item(1, "other", 1, false), item(2, "bakery", 1, false)];
        let report = waste_report(&items, today());
        let names: Vec<&str> = report.categories.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["bakery", "other"]);
    }
}
