use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use larder_core::{DomainError, DomainResult, Entity, ItemId};

use crate::expiry::ExpiryStatus;

/// One food item as held in a user's inventory snapshot.
///
/// Owned by the caller; the classifier only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub category: String,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub consumed: bool,
}

impl InventoryItem {
    /// Build an active (not consumed) item, rejecting a blank name.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        quantity: u32,
        category: impl Into<String>,
        purchase_date: NaiveDate,
        expiry_date: NaiveDate,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            id: id.into(),
            name,
            quantity,
            category: category.into(),
            purchase_date,
            expiry_date,
            consumed: false,
        })
    }

    pub fn with_consumed(mut self, consumed: bool) -> Self {
        self.consumed = consumed;
        self
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// An inventory item together with its expiry classification as of one
/// reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedItem {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub days_remaining: i64,
    pub status: ExpiryStatus,
}

impl Entity for ClassifiedItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.item.id
    }
}
