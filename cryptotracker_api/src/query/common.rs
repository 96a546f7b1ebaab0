//! The [`Query`] trait shared by all query builders.

use url::Url;

/// Trait implemented by all query builders.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}
