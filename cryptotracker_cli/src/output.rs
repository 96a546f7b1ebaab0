use anyhow::Result;
use cryptotracker_api::types::{Coin, CoinPrice};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

const CHART_WIDTH: usize = 24;

#[derive(Tabled, Serialize)]
struct CoinRow {
    #[tabled(rename = "Rank")]
    #[serde(rename = "Rank")]
    rank: u32,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "24h")]
    #[serde(rename = "24h")]
    change: String,
}

#[derive(Tabled, Serialize)]
struct DetailRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
struct PriceRow {
    #[tabled(rename = "Time (UTC)")]
    #[serde(rename = "Time (UTC)")]
    time: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Chart")]
    #[serde(skip)]
    chart: String,
}

// -- Row builders --

fn build_coin_rows(coins: &[Coin]) -> Vec<CoinRow> {
    coins
        .iter()
        .map(|c| CoinRow {
            rank: c.rank,
            name: c.name.clone(),
            symbol: c.symbol.clone(),
            price: format!("$ {}", format_usd(c.price_usd)),
            change: format_percent(c.change_percent_24h),
        })
        .collect()
}

fn build_detail_rows(coin: &Coin) -> Vec<DetailRow> {
    let change = coin.change_24h_usd();
    let amount = format_usd(change);
    let signed_change = match amount.strip_prefix('-') {
        Some(abs) => format!("-$ {}", abs),
        None if change > 0.0 => format!("+$ {}", amount),
        None => format!("$ {}", amount),
    };
    vec![
        DetailRow {
            field: "Name".to_string(),
            value: format!("{} ({})", coin.name, coin.symbol),
        },
        DetailRow {
            field: "Market Cap".to_string(),
            value: format!("$ {}", format_usd(coin.market_cap_usd)),
        },
        DetailRow {
            field: "Price".to_string(),
            value: format!("$ {}", format_usd(coin.price_usd)),
        },
        DetailRow {
            field: "Change (24h)".to_string(),
            value: format!(
                "{} ({})",
                signed_change,
                format_percent(coin.change_percent_24h)
            ),
        },
    ]
}

fn build_price_rows(prices: &[CoinPrice]) -> Vec<PriceRow> {
    let min = prices.iter().map(|p| p.price_usd).fold(f64::INFINITY, f64::min);
    let max = prices
        .iter()
        .map(|p| p.price_usd)
        .fold(f64::NEG_INFINITY, f64::max);
    prices
        .iter()
        .map(|p| PriceRow {
            time: p.date_time.format("%-I%p %-m/%-d").to_string(),
            price: format!("$ {}", format_usd(p.price_usd)),
            chart: chart_bar(p.price_usd, min, max, CHART_WIDTH),
        })
        .collect()
}

// -- Table output --

pub fn print_coins_table(coins: &[Coin]) {
    println!("{}", Table::new(build_coin_rows(coins)));
}

pub fn print_coin_table(coin: &Coin) {
    println!("{}", Table::new(build_detail_rows(coin)));
}

pub fn print_prices_table(prices: &[CoinPrice]) {
    println!("{}", Table::new(build_price_rows(prices)));
}

// -- Markdown output --

pub fn print_coins_markdown(coins: &[Coin]) {
    let mut table = Table::new(build_coin_rows(coins));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_coin_markdown(coin: &Coin) {
    let mut table = Table::new(build_detail_rows(coin));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_prices_markdown(prices: &[CoinPrice]) {
    let mut table = Table::new(build_price_rows(prices));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

fn write_csv<R: Serialize>(rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_coins_csv(coins: &[Coin]) -> Result<()> {
    write_csv(build_coin_rows(coins))
}

pub fn print_coin_csv(coin: &Coin) -> Result<()> {
    write_csv(build_detail_rows(coin))
}

pub fn print_prices_csv(prices: &[CoinPrice]) -> Result<()> {
    write_csv(build_price_rows(prices))
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Two decimals with `,` thousands separators, e.g. `62,828.15`.
fn format_usd(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac_part)
}

fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

fn chart_bar(value: f64, min: f64, max: f64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let span = max - min;
    let filled = if span.is_finite() && span > 0.0 {
        1 + (((value - min) / span) * (width - 1) as f64).round() as usize
    } else {
        width
    };
    "█".repeat(filled.min(width))
}
