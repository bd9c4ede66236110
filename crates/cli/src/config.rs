//! Resolved runtime settings.
//!
//! Every setting comes from a flag with an environment fallback (see
//! [`Cli`](crate::app::Cli)); this module only fills in what is left unset.

use chrono::{Local, NaiveDate};

use larder_inventory::ExpiryPolicy;

use crate::app::Cli;
use crate::output::OutputFormat;

/// Overrides the reference date (YYYY-MM-DD).
pub const TODAY_ENV: &str = "LARDER_TODAY";

/// Overrides the expiring-soon threshold in days.
pub const EXPIRING_SOON_ENV: &str = "LARDER_EXPIRING_SOON_DAYS";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Settings {
    pub today: NaiveDate,
    pub policy: ExpiryPolicy,
    pub format: OutputFormat,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            today: cli.today.unwrap_or_else(|| Local::now().date_naive()),
            policy: ExpiryPolicy::new(cli.expiring_soon_days),
            format: cli.format,
        }
    }
}
