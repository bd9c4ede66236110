//! # larder command-line interface
//!
//! A thin caller around `larder-inventory`: it reads snapshot files, picks
//! the reference date and threshold, and prints results. All classification
//! rules live in the library crates.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `classify` | Display-ordered snapshot plus fresh/expiring/expired counts |
//! | `expiring` | Active items with at most N days left |
//! | `waste` | Consumed vs. wasted items per category |
//! | `shelf-life` | Typical shelf lives and expiry estimates |
//!
//! Every command accepts `--format text|json`.

pub mod app;
pub mod commands;
pub mod config;
pub mod output;

pub use app::{Cli, Commands, ShelfLifeCommand, execute, run};
pub use config::Settings;
pub use output::OutputFormat;
