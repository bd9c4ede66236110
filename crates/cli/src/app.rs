use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use larder_core::parse_calendar_date;
use larder_inventory::EXPIRING_SOON_DAYS;
use larder_observability::{LOG_FORMAT_ENV, LogFormat};

use crate::commands;
use crate::config::{EXPIRING_SOON_ENV, Settings, TODAY_ENV};
use crate::output::OutputFormat;

/// Classify a household food inventory by expiry.
///
/// Reads an inventory snapshot as served by the backend (`{"items": [...]}`
/// or a bare array) and reports what is expired, what is expiring soon and
/// what is still fresh.
#[derive(Parser, Debug)]
#[command(name = "larder", version, about, long_about = None)]
pub struct Cli {
    /// Reference date (YYYY-MM-DD). Defaults to the local calendar date.
    #[arg(long, global = true, env = TODAY_ENV, value_parser = parse_calendar_date)]
    pub today: Option<NaiveDate>,

    /// Items with at most this many days left count as expiring.
    #[arg(
        long,
        global = true,
        env = EXPIRING_SOON_ENV,
        default_value_t = EXPIRING_SOON_DAYS,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    pub expiring_soon_days: i64,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log format on stderr (`pretty` or `json`).
    #[arg(long, global = true, env = LOG_FORMAT_ENV, default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a snapshot and print it in display order with a summary.
    Classify {
        /// Snapshot file, or `-` for stdin.
        #[arg(long)]
        input: PathBuf,

        /// Keep items already marked consumed.
        #[arg(long)]
        include_consumed: bool,
    },

    /// List active items with at most N days left, expired ones included.
    Expiring {
        /// Snapshot file, or `-` for stdin.
        #[arg(long)]
        input: PathBuf,

        /// Window in days. Defaults to the expiring-soon threshold.
        #[arg(long, allow_negative_numbers = true)]
        within: Option<i64>,
    },

    /// Waste analytics over every item in the snapshot, consumed ones included.
    Waste {
        /// Snapshot file, or `-` for stdin.
        #[arg(long)]
        input: PathBuf,
    },

    /// Typical shelf lives of common foods.
    #[command(subcommand)]
    ShelfLife(ShelfLifeCommand),
}

#[derive(Subcommand, Debug)]
pub enum ShelfLifeCommand {
    /// Estimate the expiry date of a purchase.
    Estimate {
        #[arg(long)]
        category: String,

        #[arg(long)]
        name: String,

        /// Purchase date (YYYY-MM-DD).
        #[arg(long, value_parser = parse_calendar_date)]
        purchased: NaiveDate,
    },

    /// Foods whose name contains the query.
    Search { query: String },

    /// Shelf life of one food by exact name.
    Lookup { food: String },
}

/// Parse arguments, set up logging and run the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    larder_observability::init(cli.log_format);

    let settings = Settings::from_cli(&cli);
    tracing::debug!(
        today = %settings.today,
        expiring_soon_days = settings.policy.expiring_soon_days(),
        "resolved settings"
    );

    let rendered = execute(&cli.command, &settings)?;
    println!("{rendered}");
    Ok(())
}

/// Run one command and return what should be printed.
pub fn execute(command: &Commands, settings: &Settings) -> Result<String> {
    match command {
        Commands::Classify {
            input,
            include_consumed,
        } => commands::classify_command(input, *include_consumed, settings),
        Commands::Expiring { input, within } => {
            let within = within.unwrap_or(settings.policy.expiring_soon_days());
            commands::expiring_command(input, within, settings)
        }
        Commands::Waste { input } => commands::waste_command(input, settings),
        Commands::ShelfLife(cmd) => commands::shelf_life_command(cmd, settings),
    }
}
