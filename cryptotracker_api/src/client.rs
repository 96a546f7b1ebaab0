//! HTTP client for the CoinCap REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{AssetsQuery, HistoryQuery, Query},
    response::{classify, BufferedResponse, HttpResponseView},
    types::{Coin, CoinDto, CoinPrice, CoinPriceDto, Response},
    Error,
};

/// Request timeout for CoinCap API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the CoinCap API.
///
/// Every response goes through [`classify`], so callers see either the
/// decoded payload, [`Error::Network`] with the classified kind, or
/// [`Error::RequestFailed`] when no response was received at all.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://api.coincap.io/v2`.
    base_api_url: String,
    api_key: Option<String>,
}

impl Client {
    /// Creates a new client pointing at the production CoinCap API.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url("https://api.coincap.io/v2")
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
        })
    }

    /// Sends `Authorization: Bearer <key>` with every request.
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Appends `segments` to the base URL, percent-encoding each one so an
    /// id cannot add path levels or query parameters.
    fn get_url(&self, segments: &[&str], query: Option<&impl Query>) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::RequestFailed
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry a path: {}", self.base_api_url);
                Error::RequestFailed
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, segments: &[&str], query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(segments, query)?;
        let path = url.path().to_string();
        let mut request = self.http.get(url).header("accept", "application/json");
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }
        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to get resource {}: {}", path, e);
            Error::RequestFailed
        })?;

        let resp = BufferedResponse::from_reqwest(resp).await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        classify::<T, _>(resp).map_err(|kind| {
            tracing::warn!("Request to {} failed with status {}: {}", path, status, kind);
            Error::Network(kind)
        })
    }

    /// Fetches the asset listing, ordered by rank.
    pub async fn get_coins(&self, query: &AssetsQuery) -> Result<Vec<Coin>, Error> {
        let resp = self
            .get::<Response<Vec<CoinDto>>, AssetsQuery>(&["assets"], Some(query))
            .await?;
        Ok(resp.data.into_iter().map(Coin::from).collect())
    }

    /// Fetches a single asset by its CoinCap id (e.g. `bitcoin`).
    pub async fn get_coin(&self, coin_id: &str) -> Result<Coin, Error> {
        let coin_id = check_coin_id(coin_id)?;
        let resp = self
            .get::<Response<CoinDto>, AssetsQuery>(&["assets", coin_id], None)
            .await?;
        Ok(resp.data.into())
    }

    /// Fetches price samples for an asset over the query's window.
    pub async fn get_coin_history(
        &self,
        coin_id: &str,
        query: &HistoryQuery,
    ) -> Result<Vec<CoinPrice>, Error> {
        let coin_id = check_coin_id(coin_id)?;
        let resp = self
            .get::<Response<Vec<CoinPriceDto>>, HistoryQuery>(
                &["assets", coin_id, "history"],
                Some(query),
            )
            .await?;
        Ok(resp.data.into_iter().map(CoinPrice::from).collect())
    }
}

/// Ids that would collapse into a different path once segments are joined.
fn check_coin_id(coin_id: &str) -> Result<&str, Error> {
    match coin_id.trim() {
        "" | "." | ".." => Err(Error::InvalidCoinId(coin_id.to_string())),
        id => Ok(id),
    }
}
