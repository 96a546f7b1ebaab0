use anyhow::Result;
use clap::Args;
use cryptotracker_api::Client;

use super::api_error;
use crate::output::{print_coin_csv, print_coin_markdown, print_coin_table, print_json, OutputFormat};

#[derive(Args)]
pub struct CoinArgs {
    /// CoinCap asset id (e.g. bitcoin, ethereum)
    pub id: String,
}

pub async fn run(args: &CoinArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let coin = client.get_coin(&args.id).await.map_err(api_error)?;
    match format {
        OutputFormat::Table => print_coin_table(&coin),
        OutputFormat::Json => print_json(&coin),
        OutputFormat::Csv => print_coin_csv(&coin)?,
        OutputFormat::Markdown => print_coin_markdown(&coin),
    }
    Ok(())
}
