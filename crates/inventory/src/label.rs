use serde::{Deserialize, Serialize};

/// The two lines of text shown beside an item: a headline ("3", "Today",
/// "Expired") and a caption ("days left", "2 days ago").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryLabel {
    pub headline: String,
    pub caption: String,
}

impl ExpiryLabel {
    pub fn for_days(days_remaining: i64) -> Self {
        let headline = match days_remaining {
            d if d < 0 => "Expired".to_string(),
            0 => "Today".to_string(),
            d => d.to_string(),
        };
        let caption = match days_remaining {
            d if d < 0 => format!("{} days ago", d.unsigned_abs()),
            0 => "Expires today".to_string(),
            1 => "day left".to_string(),
            _ => "days left".to_string(),
        };
        Self { headline, caption }
    }
}

impl core::fmt::Display for ExpiryLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.headline, self.caption)
    }
}
