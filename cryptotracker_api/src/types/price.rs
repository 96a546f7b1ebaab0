use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::number::f64_lenient;

/// One sample from `/assets/{id}/history`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPriceDto {
    #[serde(deserialize_with = "f64_lenient")]
    pub price_usd: f64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinPrice {
    pub price_usd: f64,
    pub date_time: DateTime<Utc>,
}

impl From<CoinPriceDto> for CoinPrice {
    fn from(dto: CoinPriceDto) -> Self {
        Self {
            price_usd: dto.price_usd,
            date_time: dto.time,
        }
    }
}
