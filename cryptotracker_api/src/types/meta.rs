use serde::{Deserialize, Serialize};

/// Envelope wrapping every CoinCap payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct Response<T> {
    pub data: T,
    /// Server time the payload was produced, in epoch milliseconds.
    #[serde(default)]
    pub timestamp: Option<i64>,
}
