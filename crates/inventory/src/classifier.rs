//! Snapshot-level classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::expiry::{ExpiryPolicy, days_remaining};
use crate::item::{ClassifiedItem, InventoryItem};
use crate::ordering::sort_for_display;
use crate::summary::{InventorySummary, summarize};

/// Result of classifying one snapshot: items in display order plus counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedInventory {
    pub items: Vec<ClassifiedItem>,
    pub summary: InventorySummary,
}

/// Stateless classifier over inventory snapshots.
///
/// Holds only its [`ExpiryPolicy`]; every call re-derives its output from
/// the snapshot and reference date it is given.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ExpiryClassifier {
    policy: ExpiryPolicy,
}

impl ExpiryClassifier {
    pub fn new(policy: ExpiryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ExpiryPolicy {
        self.policy
    }

    pub fn classify_item(&self, item: &InventoryItem, today: NaiveDate) -> ClassifiedItem {
        let days = days_remaining(item.expiry_date, today);
        ClassifiedItem {
            item: item.clone(),
            days_remaining: days,
            status: self.policy.classify(days),
        }
    }

    /// Classify every item, order for display and tally per status.
    ///
    /// Consumed items are classified like any other; filter beforehand if
    /// they should not be shown.
    pub fn classify_snapshot(
        &self,
        items: &[InventoryItem],
        today: NaiveDate,
    ) -> ClassifiedInventory {
        let mut classified: Vec<ClassifiedItem> = items
            .iter()
            .map(|item| self.classify_item(item, today))
            .collect();
        sort_for_display(&mut classified);
        let summary = summarize(&classified);

        ClassifiedInventory {
            items: classified,
            summary,
        }
    }

    /// Active items with at most `days` left, already expired ones included,
    /// in display order.
    pub fn expiring_within(
        &self,
        items: &[InventoryItem],
        today: NaiveDate,
        days: i64,
    ) -> Vec<ClassifiedItem> {
        let mut hits: Vec<ClassifiedItem> = items
            .iter()
            .filter(|item| !item.consumed)
            .map(|item| self.classify_item(item, today))
            .filter(|c| c.days_remaining <= days)
            .collect();
        sort_for_display(&mut hits);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiry::ExpiryStatus;
    use chrono::Days;
    use larder_core::ItemId;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn item(id: &str, expiry: NaiveDate) -> InventoryItem {
        InventoryItem::new(id, format!("food {id}"), 1, "other", today(), expiry).unwrap()
    }

    fn ids(items: &[ClassifiedItem]) -> Vec<ItemId> {
        items.iter().map(|c| c.item.id.clone()).collect()
    }

    #[test]
    fn mixed_snapshot_is_ordered_and_summarized() {
        let t = today();
        let snapshot = vec![
            item("1", t - Days::new(2)),
            item("2", t + Days::new(1)),
            item("3", t + Days::new(10)),
            item("4", t),
        ];

        let out = ExpiryClassifier::default().classify_snapshot(&snapshot, t);

        let got: Vec<(ItemId, ExpiryStatus, i64)> = out
            .items
            .iter()
            .map(|c| (c.item.id.clone(), c.status, c.days_remaining))
            .collect();
        assert_eq!(
            got,
            vec![
                (ItemId::from("1"), ExpiryStatus::Expired, -2),
                (ItemId::from("4"), ExpiryStatus::Expired, 0),
                (ItemId::from("2"), ExpiryStatus::Expiring, 1),
                (ItemId::from("3"), ExpiryStatus::Fresh, 10),
            ]
        );
        assert_eq!(
            out.summary,
            InventorySummary {
                fresh_count: 1,
                expiring_count: 1,
                expired_count: 2,
            }
        );
    }

    #[test]
    fn equal_days_keep_input_order() {
        let t = today();
        let snapshot = vec![item("B", t + Days::new(2)), item("A", t + Days::new(2))];

        let out = ExpiryClassifier::default().classify_snapshot(&snapshot, t);

        assert_eq!(ids(&out.items), vec![ItemId::from("B"), ItemId::from("A")]);
        assert!(out.items.iter().all(|c| c.status == ExpiryStatus::Expiring));
    }

    #[test]
    fn input_snapshot_is_left_untouched() {
        let t = today();
        let snapshot = vec![item("late", t + Days::new(9)), item("early", t - Days::new(1))];
        let before = snapshot.clone();

        let _ = ExpiryClassifier::default().classify_snapshot(&snapshot, t);

        assert_eq!(snapshot, before);
    }

    #[test]
    fn consumed_items_are_classified_not_filtered() {
        let t = today();
        let snapshot = vec![item("gone", t - Days::new(3)).with_consumed(true)];

        let out = ExpiryClassifier::default().classify_snapshot(&snapshot, t);

        assert_eq!(out.items.len(), 1);
        assert_eq!(out.summary.expired_count, 1);
    }

    #[test]
    fn custom_policy_changes_buckets() {
        let t = today();
        let snapshot = vec![item("x", t + Days::new(5))];

        let out = ExpiryClassifier::new(ExpiryPolicy::new(7)).classify_snapshot(&snapshot, t);

        assert_eq!(out.items[0].status, ExpiryStatus::Expiring);
    }

    #[test]
    fn expiring_within_skips_consumed_and_distant_items() {
        let t = today();
        let snapshot = vec![
            item("far", t + Days::new(8)),
            item("soon", t + Days::new(3)),
            item("eaten", t + Days::new(1)).with_consumed(true),
            item("past", t - Days::new(4)),
        ];

        let hits = ExpiryClassifier::default().expiring_within(&snapshot, t, 3);

        assert_eq!(ids(&hits), vec![ItemId::from("past"), ItemId::from("soon")]);
    }

    #[test]
    fn classified_item_serializes_flat() {
        let t = today();
        let c = ExpiryClassifier::default().classify_item(&item("7", t + Days::new(4)), t);
        let json = serde_json::to_value(&c).unwrap();

        assert_eq!(json["id"], "7");
        assert_eq!(json["expiry_date"], "2024-06-19");
        assert_eq!(json["days_remaining"], 4);
        assert_eq!(json["status"], "fresh");
    }
}
