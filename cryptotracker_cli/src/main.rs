mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cryptotracker_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "cryptotracker")]
#[command(about = "Browse crypto asset prices from CoinCap")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (defaults to $COINCAP_BASE_URL, then the public CoinCap API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List assets by rank
    Coins(commands::coins::CoinsArgs),
    /// Show market cap, price and 24h change for one asset
    Coin(commands::coin::CoinArgs),
    /// Show an asset's recent price history
    History(commands::history::HistoryArgs),
}

fn build_client(base_url: Option<&str>) -> Result<Client> {
    let base_url = base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("COINCAP_BASE_URL").ok());
    let client = match base_url {
        Some(url) => Client::with_base_url(&url)?,
        None => Client::new()?,
    };
    Ok(match std::env::var("COINCAP_API_KEY") {
        Ok(key) if !key.trim().is_empty() => client.with_api_key(key.trim()),
        _ => client,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cryptotracker=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = build_client(cli.base_url.as_deref())?;

    match &cli.command {
        Commands::Coins(args) => commands::coins::run(args, &client, &format).await?,
        Commands::Coin(args) => commands::coin::run(args, &client, &format).await?,
        Commands::History(args) => commands::history::run(args, &client, &format).await?,
    }

    Ok(())
}
