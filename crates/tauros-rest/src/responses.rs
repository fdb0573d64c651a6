//! Resolved results of Tauros API calls.

use serde::Serialize;
use serde_json::Value;

/// Message returned for private calls on a client without credentials.
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Authentication credentials were not provided.";

/// A call that completed, successfully or with an HTTP error status.
///
/// Serializes to the decoded body for `Ok` and to
/// `{"status_code": .., "message": ..}` for `HttpError`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    /// Decoded JSON body of a 2xx response, unvalidated.
    Ok(Value),
    /// Non-2xx status, or the local missing-credentials refusal (401).
    HttpError {
        /// HTTP status code.
        status_code: u16,
        /// Status text of the response.
        message: String,
    },
}

impl ApiResponse {
    /// The refusal returned before any work for private calls without
    /// credentials.
    pub fn missing_credentials() -> Self {
        Self::HttpError {
            status_code: 401,
            message: MISSING_CREDENTIALS_MESSAGE.to_string(),
        }
    }

    /// Returns true for a decoded 2xx body.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// The decoded body, if the call succeeded.
    pub fn json(&self) -> Option<&Value> {
        match self {
            Self::Ok(value) => Some(value),
            Self::HttpError { .. } => None,
        }
    }

    /// Consume the response, returning the decoded body if the call succeeded.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Ok(value) => Some(value),
            Self::HttpError { .. } => None,
        }
    }

    /// The error status code, if the call failed at the HTTP level.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Ok(_) => None,
            Self::HttpError { status_code, .. } => Some(*status_code),
        }
    }
}
