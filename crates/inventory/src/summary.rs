use serde::{Deserialize, Serialize};

use larder_core::ValueObject;

use crate::expiry::ExpiryStatus;
use crate::item::ClassifiedItem;

/// Per-bucket counts over a set of classified items.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub fresh_count: usize,
    pub expiring_count: usize,
    pub expired_count: usize,
}

impl InventorySummary {
    pub fn total(&self) -> usize {
        self.fresh_count + self.expiring_count + self.expired_count
    }

    pub fn count(&self, status: ExpiryStatus) -> usize {
        match status {
            ExpiryStatus::Fresh => self.fresh_count,
            ExpiryStatus::Expiring => self.expiring_count,
            ExpiryStatus::Expired => self.expired_count,
        }
    }

    fn record(&mut self, status: ExpiryStatus) {
        match status {
            ExpiryStatus::Fresh => self.fresh_count += 1,
            ExpiryStatus::Expiring => self.expiring_count += 1,
            ExpiryStatus::Expired => self.expired_count += 1,
        }
    }
}

impl ValueObject for InventorySummary {}

/// Tally classified items by status in a single pass.
pub fn summarize<'a, I>(items: I) -> InventorySummary
where
    I: IntoIterator<Item = &'a ClassifiedItem>,
{
    let mut summary = InventorySummary::default();
    for item in items {
        summary.record(item.status);
    }
    summary
}
