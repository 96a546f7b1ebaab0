use anyhow::Result;
use clap::Args;
use cryptotracker_api::{AssetsQuery, Client};

use super::api_error;
use crate::output::{
    print_coins_csv, print_coins_markdown, print_coins_table, print_json, OutputFormat,
};

#[derive(Args)]
pub struct CoinsArgs {
    /// Search by name or symbol
    #[arg(long)]
    pub search: Option<String>,

    /// Number of assets to show
    #[arg(long, default_value = "20")]
    pub limit: u32,

    /// Number of assets to skip
    #[arg(long, default_value = "0")]
    pub offset: u32,
}

pub async fn run(args: &CoinsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = AssetsQuery::default()
        .with_limit(args.limit)
        .with_offset(args.offset);

    if let Some(search) = &args.search {
        query = query.with_search(search);
    }

    let coins = client.get_coins(&query).await.map_err(api_error)?;
    match format {
        OutputFormat::Table => print_coins_table(&coins),
        OutputFormat::Json => print_json(&coins),
        OutputFormat::Csv => print_coins_csv(&coins)?,
        OutputFormat::Markdown => print_coins_markdown(&coins),
    }
    Ok(())
}
