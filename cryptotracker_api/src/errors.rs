//! Error types for the API client.

/// Classification of a completed HTTP response that did not yield a payload.
///
/// The set is closed: every non-success outcome of [`crate::classify`] is
/// exactly one of these kinds.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkError {
    /// The server answered 408.
    #[error("Request timed out")]
    RequestTimeout,
    /// The server answered 429.
    #[error("Too many requests")]
    TooManyRequests,
    /// The server answered with a 5xx status.
    #[error("Server error")]
    ServerError,
    /// A 2xx body could not be turned into the expected payload type.
    #[error("Failed to decode response body")]
    Serialization,
    /// Any status without a dedicated kind (3xx, 4xx other than 408/429, ...).
    #[error("Unknown network error")]
    Unknown,
}

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (bad URL, connection failure,
    /// timeout, or the body could not be read).
    #[error("Request failed")]
    RequestFailed,
    /// The coin id is empty or a relative path segment.
    #[error("Invalid coin id: {0:?}")]
    InvalidCoinId(String),
    /// A response arrived and was classified as an error.
    #[error(transparent)]
    Network(#[from] NetworkError),
}
