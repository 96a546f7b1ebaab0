use anyhow::{anyhow, Result};
use clap::Args;
use cryptotracker_api::{Client, HistoryQuery, Interval};

use super::api_error;
use crate::output::{
    print_json, print_prices_csv, print_prices_markdown, print_prices_table, OutputFormat,
};

const MAX_DAYS: i64 = 3650;

#[derive(Args)]
pub struct HistoryArgs {
    /// CoinCap asset id (e.g. bitcoin, ethereum)
    pub id: String,

    /// Sampling interval: m1, m5, m15, m30, h1, h2, h6, h12, d1
    #[arg(long, default_value = "h6")]
    pub interval: Interval,

    /// How many days back to fetch (1-3650)
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(i64).range(1..=MAX_DAYS))]
    pub days: i64,
}

pub async fn run(args: &HistoryArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = HistoryQuery::last_days(args.days)
        .ok_or_else(|| anyhow!("--days {} is out of range", args.days))?
        .with_interval(args.interval);
    let prices = client
        .get_coin_history(&args.id, &query)
        .await
        .map_err(api_error)?;

    if prices.is_empty() {
        eprintln!("No price data for {} in the last {} days.", args.id, args.days);
        return Ok(());
    }

    match format {
        OutputFormat::Table => print_prices_table(&prices),
        OutputFormat::Json => print_json(&prices),
        OutputFormat::Csv => print_prices_csv(&prices)?,
        OutputFormat::Markdown => print_prices_markdown(&prices),
    }
    Ok(())
}
