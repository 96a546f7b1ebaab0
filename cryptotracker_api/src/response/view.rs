use serde::de::DeserializeOwned;

use super::MediaType;

/// Why a response body could not be turned into the requested type.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// No decoder is registered for the declared content type.
    #[error("No transformation from {content_type} to {target}")]
    NoTransformation {
        content_type: String,
        target: &'static str,
    },
    /// The body was read but is not valid JSON for the target type.
    #[error("Malformed body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read access to a completed HTTP response.
///
/// Both body accessors consume the view, so a body is read at most once.
pub trait HttpResponseView {
    fn status(&self) -> u16;

    fn content_type(&self) -> Option<MediaType>;

    /// Decodes the body into `T` using the decoder registered for the
    /// declared content type.
    fn body<T: DeserializeOwned>(self) -> Result<T, DecodeError>
    where
        Self: Sized;

    fn body_as_text(self) -> String
    where
        Self: Sized;
}

/// A response whose body has already been read into memory.
#[derive(Debug, Clone)]
pub struct BufferedResponse {
    status: u16,
    content_type: Option<MediaType>,
    body: Vec<u8>,
}

impl BufferedResponse {
    pub fn new(status: u16, content_type: Option<MediaType>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// Reads status, content type and body from a reqwest response.
    ///
    /// A `Content-Type` header that does not parse as `type/subtype` is
    /// treated as absent.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| match v.parse::<MediaType>() {
                Ok(mt) => Some(mt),
                Err(e) => {
                    tracing::debug!("Ignoring content-type header: {}", e);
                    None
                }
            });
        let body = response.bytes().await?;
        Ok(Self::new(status, content_type, body.to_vec()))
    }
}

impl HttpResponseView for BufferedResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn content_type(&self) -> Option<MediaType> {
        self.content_type.clone()
    }

    fn body<T: DeserializeOwned>(self) -> Result<T, DecodeError> {
        match &self.content_type {
            Some(mt) if mt.has_json_syntax() => Ok(serde_json::from_slice(&self.body)?),
            other => Err(DecodeError::NoTransformation {
                content_type: other
                    .as_ref()
                    .map(|mt| mt.to_string())
                    .unwrap_or_else(|| "<none>".to_string()),
                target: std::any::type_name::<T>(),
            }),
        }
    }

    fn body_as_text(self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
