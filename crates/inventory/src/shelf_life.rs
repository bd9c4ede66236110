//! Typical shelf lives, used to estimate an expiry date at purchase time.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use larder_core::{DomainError, DomainResult};

/// Shelf life used when the category is not in the table.
pub const DEFAULT_SHELF_LIFE_DAYS: u32 = 7;

/// `(category, [(food, days)])`; order matters for matching.
const TABLE: &[(&str, &[(&str, u32)])] = &[
    ("dairy", &[("milk", 7), ("yogurt", 14), ("cheese", 30), ("butter", 30)]),
    ("produce", &[("lettuce", 7), ("tomatoes", 7), ("apples", 14), ("bananas", 5)]),
    ("meat", &[("chicken", 2), ("beef", 3), ("pork", 3), ("fish", 2)]),
    ("bakery", &[("bread", 5), ("bagels", 5), ("cake", 3), ("cookies", 14)]),
    ("other", &[("eggs", 21), ("pasta", 365), ("rice", 365), ("cereal", 180)]),
];

/// A known food and how long it typically keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodShelfLife {
    pub name: String,
    pub category: String,
    pub typical_expiry_days: u32,
}

impl FoodShelfLife {
    fn new(category: &str, name: &str, days: u32) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            typical_expiry_days: days,
        }
    }
}

/// Shelf life in days for an item of `category` called `item_name`.
///
/// Within a known category the first listed food whose name occurs in
/// `item_name` wins, falling back to the category's first entry. Matching
/// is case-insensitive.
pub fn shelf_life_days(category: &str, item_name: &str) -> u32 {
    let category = category.to_lowercase();
    let item_name = item_name.to_lowercase();

    let Some((_, foods)) = TABLE.iter().find(|(cat, _)| *cat == category) else {
        return DEFAULT_SHELF_LIFE_DAYS;
    };

    foods
        .iter()
        .find(|(food, _)| item_name.contains(food))
        .or_else(|| foods.first())
        .map(|(_, days)| *days)
        .unwrap_or(DEFAULT_SHELF_LIFE_DAYS)
}

/// Expected expiry date for an item bought on `purchase_date`.
pub fn estimate_expiry(category: &str, item_name: &str, purchase_date: NaiveDate) -> NaiveDate {
    let days = shelf_life_days(category, item_name);
    purchase_date
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Foods whose name contains `query`, in table order.
pub fn search(query: &str) -> Vec<FoodShelfLife> {
    let query = query.to_lowercase();
    TABLE
        .iter()
        .flat_map(|(cat, foods)| foods.iter().map(move |(food, days)| (*cat, *food, *days)))
        .filter(|(_, food, _)| food.contains(&query))
        .map(|(cat, food, days)| FoodShelfLife::new(cat, food, days))
        .collect()
}

/// Exact lookup of a food by name.
pub fn lookup(food: &str) -> DomainResult<FoodShelfLife> {
    let wanted = food.to_lowercase();
    TABLE
        .iter()
        .find_map(|(cat, foods)| {
            foods
                .iter()
                .find(|(name, _)| *name == wanted)
                .map(|(name, days)| FoodShelfLife::new(cat, name, *days))
        })
        .ok_or_else(|| DomainError::not_found(format!("food `{food}`")))
}
