pub mod coin;
pub mod coins;
pub mod history;

use cryptotracker_api::{Error, NetworkError};

/// Turns a client error into the message shown to the user.
pub(crate) fn describe_error(err: &Error) -> &'static str {
    match err {
        Error::RequestFailed => "Couldn't reach the server. Check your internet connection.",
        Error::InvalidCoinId(_) => "That coin id is not valid.",
        Error::Network(kind) => match kind {
            NetworkError::RequestTimeout => "The request timed out.",
            NetworkError::TooManyRequests => "Rate limit reached. Wait a moment and try again.",
            NetworkError::ServerError => "The server ran into a problem. Please try again later.",
            NetworkError::Serialization => "Couldn't understand the server's response.",
            NetworkError::Unknown => "Something went wrong with the request.",
        },
    }
}

pub(crate) fn api_error(err: Error) -> anyhow::Error {
    let message = describe_error(&err);
    anyhow::Error::new(err).context(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_network_error_has_a_distinct_message() {
        let kinds = [
            NetworkError::RequestTimeout,
            NetworkError::TooManyRequests,
            NetworkError::ServerError,
            NetworkError::Serialization,
            NetworkError::Unknown,
        ];
        let mut messages: Vec<&str> = kinds
            .iter()
            .map(|k| describe_error(&Error::Network(*k)))
            .collect();
        messages.push(describe_error(&Error::RequestFailed));
        messages.push(describe_error(&Error::InvalidCoinId("..".to_string())));
        let count = messages.len();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), count);
    }
}
