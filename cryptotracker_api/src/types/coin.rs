use serde::{Deserialize, Serialize};

use super::number::{f64_lenient, f64_or_zero, u32_lenient};

/// An asset as returned by `/assets` and `/assets/{id}`.
///
/// Only the fields the app displays are modelled; the rest of the payload
/// (supply, vwap, explorer, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinDto {
    pub id: String,
    #[serde(deserialize_with = "u32_lenient")]
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub market_cap_usd: f64,
    #[serde(deserialize_with = "f64_lenient")]
    pub price_usd: f64,
    #[serde(rename = "changePercent24Hr", default, deserialize_with = "f64_or_zero")]
    pub change_percent_24_hr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coin {
    pub id: String,
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    pub market_cap_usd: f64,
    pub price_usd: f64,
    pub change_percent_24h: f64,
}

impl Coin {
    /// Absolute price change over the last 24 hours, in USD.
    pub fn change_24h_usd(&self) -> f64 {
        self.price_usd * (self.change_percent_24h / 100.0)
    }
}

impl From<CoinDto> for Coin {
    fn from(dto: CoinDto) -> Self {
        Self {
            id: dto.id,
            rank: dto.rank,
            name: dto.name,
            symbol: dto.symbol,
            market_cap_usd: dto.market_cap_usd,
            price_usd: dto.price_usd,
            change_percent_24h: dto.change_percent_24_hr,
        }
    }
}
