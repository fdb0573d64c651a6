use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The API secret is not valid base64 and cannot be used as an HMAC key.
    #[error("Invalid API secret: {0}")]
    InvalidSecret(String),
}
