//! Tauros REST API error types.
//!
//! These are the failure channel of a call. HTTP error statuses are not
//! errors; they resolve as [`ApiResponse::HttpError`](crate::ApiResponse).

use auth::AuthError;
use thiserror::Error;

/// Errors that abort a Tauros API call.
#[derive(Debug, Error)]
pub enum TaurosError {
    /// Signing failed, typically a malformed API secret.
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// No response was received. Carries the transport's message as-is.
    #[error("{0}")]
    Transport(String),

    /// A successful response did not contain valid JSON.
    #[error("{0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialization(String),

    /// The request URL could not be built from the base URL and path.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// Parser error.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message_is_unchanged() {
        let err = TaurosError::Transport("ECONNREFUSED".into());
        assert_eq!(err.to_string(), "ECONNREFUSED");
    }

    #[test]
    fn test_auth_error_converts() {
        let err: TaurosError = AuthError::InvalidSecret("bad byte".into()).into();
        assert!(matches!(err, TaurosError::Auth(_)));
    }
}
