//! Expiry arithmetic and the status policy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use larder_core::ValueObject;

/// Items with at most this many days left (and not yet expired) are
/// "expiring".
pub const EXPIRING_SOON_DAYS: i64 = 3;

/// Status bucket of an item relative to a reference date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Expired,
    Expiring,
    Fresh,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::Expiring => "expiring",
            ExpiryStatus::Fresh => "fresh",
        }
    }
}

impl core::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValueObject for ExpiryStatus {}

/// Whole calendar days from `today` until `expiry_date`.
///
/// Negative once the date has passed, zero on the day itself.
pub fn days_remaining(expiry_date: NaiveDate, today: NaiveDate) -> i64 {
    expiry_date.signed_duration_since(today).num_days()
}

/// Classify with the default threshold ([`EXPIRING_SOON_DAYS`]).
pub fn classify(days_remaining: i64) -> ExpiryStatus {
    ExpiryPolicy::default().classify(days_remaining)
}

/// Threshold configuration for [`ExpiryStatus`] assignment.
///
/// Note that "expires today" (`0` days) is always `Expired`, whatever the
/// threshold.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ExpiryPolicy {
    expiring_soon_days: i64,
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self {
            expiring_soon_days: EXPIRING_SOON_DAYS,
        }
    }
}

impl ExpiryPolicy {
    pub fn new(expiring_soon_days: i64) -> Self {
        Self { expiring_soon_days }
    }

    pub fn expiring_soon_days(&self) -> i64 {
        self.expiring_soon_days
    }

    pub fn classify(&self, days_remaining: i64) -> ExpiryStatus {
        if days_remaining <= 0 {
            ExpiryStatus::Expired
        } else if days_remaining <= self.expiring_soon_days {
            ExpiryStatus::Expiring
        } else {
            ExpiryStatus::Fresh
        }
    }

    /// Whether a freshly added item deserves a "use it soon" warning.
    ///
    /// Unlike [`classify`](Self::classify) this also fires for items that
    /// are already past their date.
    pub fn warrants_warning(&self, days_remaining: i64) -> bool {
        days_remaining <= self.expiring_soon_days
    }
}
