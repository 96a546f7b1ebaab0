mod client;
mod errors;
mod query;
pub mod response;
pub mod types;
pub use self::client::Client;
pub use self::errors::{Error, NetworkError};
pub use self::query::{AssetsQuery, HistoryQuery, Interval, Query};
pub use self::response::{
    classify, decode_lenient, BufferedResponse, DecodeError, HttpResponseView, MediaType,
};
