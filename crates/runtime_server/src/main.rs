//! `pricecheck-server`: serves the price checker page.
//!
//! Usage:
//!   pricecheck-server [-c <config.toml>] [--listen <addr>] [--data <prices.csv>]

use std::path::PathBuf;

use clap::Parser;
use infra_config::Settings;
use runtime_server::{run_server, telemetry};

/// Product price checker web server.
#[derive(Parser, Debug)]
#[command(name = "pricecheck-server", version, about = "Product price checker web server")]
struct Cli {
    /// Path to a TOML config file layered over `config/`.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Listen address (overrides `server.listen_addr`).
    #[arg(long = "listen")]
    listen: Option<String>,

    /// Price list CSV (overrides `catalog.data_path`).
    #[arg(long = "data")]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load_with(cli.config.as_deref())?;
    if let Some(listen) = cli.listen {
        settings.server.listen_addr = listen;
    }
    if let Some(data) = cli.data {
        settings.catalog.data_path = data;
    }
    settings.validate()?;

    telemetry::init(&settings.logging);

    run_server(&settings).await
}
