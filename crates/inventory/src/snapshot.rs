//! Backend snapshot decoding.
//!
//! Turns the inventory payload the backend serves into typed
//! [`InventoryItem`]s, failing fast on the first malformed record.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use larder_core::{DomainError, DomainResult, Entity, ItemId, parse_calendar_date};

use crate::item::InventoryItem;

const DEFAULT_QUANTITY: i64 = 1;
const DEFAULT_CATEGORY: &str = "other";

/// One record as it appears on the wire, before validation.
#[derive(Debug, Clone, Deserialize)]
struct RawItem {
    #[serde(default)]
    id: Option<ItemId>,
    /// Document id; database-backed responses carry it next to `id`.
    #[serde(default, rename = "_id")]
    document_id: Option<ItemId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    quantity: Option<i64>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    purchase_date: Option<String>,
    #[serde(default)]
    expiry_date: Option<String>,
    #[serde(default)]
    consumed: bool,
}

/// Decode a snapshot: either `{"items": [...]}` or a bare array.
///
/// Item ids must be unique within the snapshot.
pub fn parse_snapshot(json: &str) -> DomainResult<Vec<InventoryItem>> {
    let root: Value = serde_json::from_str(json)
        .map_err(|e| DomainError::validation(format!("malformed snapshot: {e}")))?;

    let records = match root {
        Value::Array(records) => records,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(records)) => records,
            _ => {
                return Err(DomainError::validation(
                    "malformed snapshot: expected an `items` array",
                ));
            }
        },
        _ => {
            return Err(DomainError::validation(
                "malformed snapshot: expected an object or an array",
            ));
        }
    };

    let items: Vec<InventoryItem> = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let raw: RawItem = serde_json::from_value(record).map_err(|e| {
                DomainError::validation(format!("malformed snapshot: item #{index}: {e}"))
            })?;
            validate(index, raw)
        })
        .collect::<DomainResult<_>>()?;

    let mut seen: HashSet<&ItemId> = HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.id()) {
            return Err(DomainError::validation(format!(
                "duplicate item id `{}`",
                item.id()
            )));
        }
    }

    Ok(items)
}

fn validate(index: usize, raw: RawItem) -> DomainResult<InventoryItem> {
    let field = |name: &str| format!("item #{index}: {name}");

    let id = raw
        .id
        .or(raw.document_id)
        .filter(|id| !matches!(id, ItemId::Text(text) if text.trim().is_empty()))
        .ok_or_else(|| DomainError::missing_field(field("id")))?;
    let name = raw
        .name
        .ok_or_else(|| DomainError::missing_field(field("name")))?;
    let purchase_date = raw
        .purchase_date
        .ok_or_else(|| DomainError::missing_field(field("purchase_date")))?;
    let expiry_date = raw
        .expiry_date
        .ok_or_else(|| DomainError::missing_field(field("expiry_date")))?;

    let purchase_date = parse_calendar_date(&purchase_date).map_err(|_| {
        DomainError::unparseable_date(format!("{} `{purchase_date}`", field("purchase_date")))
    })?;
    let expiry_date = parse_calendar_date(&expiry_date).map_err(|_| {
        DomainError::unparseable_date(format!("{} `{expiry_date}`", field("expiry_date")))
    })?;

    let quantity = raw.quantity.unwrap_or(DEFAULT_QUANTITY);
    let quantity = u32::try_from(quantity).map_err(|_| {
        DomainError::validation(format!("item #{index}: quantity must be >= 0 (got {quantity})"))
    })?;

    let category = raw
        .category
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let item = InventoryItem::new(id, name, quantity, category, purchase_date, expiry_date)
        .map_err(|e| match e {
            DomainError::Validation(msg) => {
                DomainError::validation(format!("item #{index}: {msg}"))
            }
            other => other,
        })?;

    Ok(item.with_consumed(raw.consumed))
}
