use std::fmt;
use std::str::FromStr;

/// A declared body media type reduced to `type/subtype`.
///
/// Parameters such as `charset` are dropped and both parts are lowercased,
/// so `Application/JSON; charset=utf-8` compares equal to `application/json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    type_: String,
    subtype: String,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Invalid media type: {0:?}")]
pub struct MediaTypeError(pub String);

impl MediaType {
    pub fn new(type_: &str, subtype: &str) -> Self {
        Self {
            type_: type_.to_ascii_lowercase(),
            subtype: subtype.to_ascii_lowercase(),
        }
    }

    pub fn application_json() -> Self {
        Self::new("application", "json")
    }

    pub fn text_html() -> Self {
        Self::new("text", "html")
    }

    pub fn type_(&self) -> &str {
        &self.type_
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Exactly `application/json`.
    pub fn is_json(&self) -> bool {
        self.type_ == "application" && self.subtype == "json"
    }

    /// Exactly `text/html`.
    pub fn is_html(&self) -> bool {
        self.type_ == "text" && self.subtype == "html"
    }

    /// `application/json` or any structured-syntax `+json` subtype
    /// (e.g. `application/vnd.api+json`).
    pub fn has_json_syntax(&self) -> bool {
        self.is_json() || self.subtype.ends_with("+json")
    }
}

impl FromStr for MediaType {
    type Err = MediaTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let essence = s.split(';').next().unwrap_or_default().trim();
        let (type_, subtype) = essence
            .split_once('/')
            .ok_or_else(|| MediaTypeError(s.to_string()))?;
        let (type_, subtype) = (type_.trim(), subtype.trim());
        if type_.is_empty() || subtype.is_empty() || subtype.contains('/') {
            return Err(MediaTypeError(s.to_string()));
        }
        Ok(Self::new(type_, subtype))
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)
    }
}
