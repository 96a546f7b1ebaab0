//! Turning completed HTTP responses into typed results.
//!
//! [`classify`] is the entry point. It works against the [`HttpResponseView`]
//! trait so any transport can feed it; [`BufferedResponse`] is the adapter
//! used by this crate's reqwest-based client.

mod classify;
mod media_type;
mod view;

pub use self::classify::{classify, decode_lenient};
pub use self::media_type::{MediaType, MediaTypeError};
pub use self::view::{BufferedResponse, DecodeError, HttpResponseView};
