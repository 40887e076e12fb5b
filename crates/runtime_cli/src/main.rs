//! `pricecheck`: command line access to the price list.
//!
//! Usage:
//!   pricecheck [-c <config.toml>] [--data <prices.csv>] check
//!   pricecheck lookup <name>
//!   pricecheck suggest <query> [--limit N]

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use infra_config::Settings;

pub use error::{CliError, Result};

/// Product price checker.
#[derive(Parser, Debug)]
#[command(name = "pricecheck", version, about = "Product price checker")]
struct Cli {
    /// Path to a TOML config file layered over `config/`.
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Price list CSV (overrides `catalog.data_path`).
    #[arg(long = "data", global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate configuration and the price list
    Check,
    /// Look up a product by its full name
    Lookup {
        /// Product name, matched ignoring case
        name: String,
    },
    /// List products whose name contains the query
    Suggest {
        /// Partial product name
        query: String,
        /// Maximum results (defaults to `catalog.suggestion_limit`)
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::load_with(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        settings.catalog.data_path = data;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Check => commands::check::run(&settings, &mut out)?,
        Commands::Lookup { name } => commands::lookup::run(&settings, &name, &mut out)?,
        Commands::Suggest { query, limit } => {
            commands::suggest::run(&settings, &query, limit, &mut out)?
        }
    }

    Ok(())
}
