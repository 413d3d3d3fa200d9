//! # record-sample
//!
//! Runs one of the console trackers against the terminal.
//!
//! ## Subcommands
//!
//! - `pets`: build a list of pets, delete some by name, then empty it.
//! - `fundraiser`: register organizations, take donations, and close with a report.
//!
//! Settings come from the defaults, then `--config` (a TOML file), then the
//! individual flags. Logs go to stderr and are filtered by `RUST_LOG`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use record_list::tracing::setup_tracing;
use record_sample::config::TrackerConfig;
use record_sample::input::Console;
use record_sample::lifecycle::{FundraiserSystem, PetSession};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "record-sample", about = "Console trackers built on an ordered record list")]
struct Cli {
    /// TOML configuration file
    #[arg(long, env = "RECORD_SAMPLE_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for receipts and the summary file
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Maximum number of records a list may hold
    #[arg(long)]
    node_limit: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Track a list of pets
    Pets,
    /// Run the donation tracker
    Fundraiser {
        /// Summary file name, relative to the data directory
        #[arg(long)]
        orgs_file: Option<PathBuf>,

        /// Processing fee withheld from each donation (0.031 = 3.1%)
        #[arg(long)]
        transaction_fee: Option<f64>,

        /// Tries allowed per credential in the report mode (0 = unlimited)
        #[arg(long)]
        max_credential_prompts: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::default(),
    };
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if cli.node_limit.is_some() {
        config.node_limit = cli.node_limit;
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    match cli.command {
        Command::Pets => {
            config.validate()?;
            info!(node_limit = ?config.node_limit, "Starting pet tracker");
            PetSession::new(console, config.new_list())
                .run()
                .context("pet tracker stopped")?;
        }
        Command::Fundraiser {
            orgs_file,
            transaction_fee,
            max_credential_prompts,
        } => {
            if let Some(orgs_file) = orgs_file {
                config.orgs_file = orgs_file;
            }
            if let Some(fee) = transaction_fee {
                config.transaction_fee = fee;
            }
            if let Some(max) = max_credential_prompts {
                config.max_credential_prompts = max;
            }
            config.validate()?;
            info!(data_dir = %config.data_dir.display(), fee = config.transaction_fee, "Starting fundraiser");
            FundraiserSystem::new(console, config)
                .run()
                .context("fundraiser stopped")?;
        }
    }

    info!("Done");
    Ok(())
}
