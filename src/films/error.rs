//! Error types for fetching films.

use thiserror::Error;

/// Message shown when the API answers with a non-success status.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

/// Errors that can occur while fetching the film list.
///
/// The display text of each variant is what the UI shows to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Upstream answered with a non-success status. The status itself is not
    /// part of the message.
    #[error("{}", REQUEST_FAILED_MESSAGE)]
    RequestFailed { status: u16 },

    /// Failed to build the client, connect, or read the response body.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_hides_status() {
        let err = FetchError::RequestFailed { status: 404 };
        assert_eq!(err.to_string(), "Request failed");
    }

    #[test]
    fn decode_error_is_verbatim() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = source.to_string();
        let err = FetchError::from(source);
        assert_eq!(err.to_string(), expected);
    }
}
