use serde::de::DeserializeOwned;

use super::{DecodeError, HttpResponseView};
use crate::NetworkError;

/// Maps a completed response to its decoded payload or a [`NetworkError`].
///
/// Status takes precedence over everything else: only 2xx responses have
/// their body read. On 2xx the declared content type picks the decoder:
///
/// * `application/json` goes through the view's negotiated decoder.
/// * `text/html` is read as text and parsed as JSON regardless, for
///   backends that mislabel JSON payloads.
/// * anything else (or no content type) falls back to the negotiated decoder.
///
/// Every decode failure becomes [`NetworkError::Serialization`], including
/// bodies that are missing a field `T` requires.
pub fn classify<T, R>(response: R) -> Result<T, NetworkError>
where
    T: DeserializeOwned,
    R: HttpResponseView,
{
    match response.status() {
        200..=299 => decode_body(response).map_err(|_| NetworkError::Serialization),
        408 => Err(NetworkError::RequestTimeout),
        429 => Err(NetworkError::TooManyRequests),
        500..=599 => Err(NetworkError::ServerError),
        _ => Err(NetworkError::Unknown),
    }
}

/// Parses JSON text into `T`, ignoring object fields `T` does not declare.
///
/// Targets that opt into `#[serde(deny_unknown_fields)]` stay strict.
pub fn decode_lenient<T: DeserializeOwned>(text: &str) -> Result<T, DecodeError> {
    Ok(serde_json::from_str(text)?)
}

fn decode_body<T, R>(response: R) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
    R: HttpResponseView,
{
    match response.content_type() {
        Some(mt) if mt.is_json() => response.body(),
        Some(mt) if mt.is_html() => decode_lenient(&response.body_as_text()),
        _ => response.body(),
    }
}
