//! Inventory expiry domain.
//!
//! This crate classifies food-inventory snapshots by how close each item is
//! to its expiry date, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage, no logging).

pub mod classifier;
pub mod expiry;
pub mod item;
pub mod label;
pub mod ordering;
pub mod shelf_life;
pub mod snapshot;
pub mod summary;
pub mod waste;

pub use classifier::{ClassifiedInventory, ExpiryClassifier};
pub use expiry::{EXPIRING_SOON_DAYS, ExpiryPolicy, ExpiryStatus, classify, days_remaining};
pub use item::{ClassifiedItem, InventoryItem};
pub use label::ExpiryLabel;
pub use ordering::{compare_for_display, sort_for_display};
pub use shelf_life::{FoodShelfLife, estimate_expiry};
pub use snapshot::parse_snapshot;
pub use summary::{InventorySummary, summarize};
pub use waste::{CategoryWaste, WasteReport, waste_report};
