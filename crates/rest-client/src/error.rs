//! Transport error types.

use thiserror::Error;

/// Errors raised before a response could be received.
///
/// `Display` renders the underlying message without a prefix so callers can
/// pass it on unchanged.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Connection error (network issue).
    #[error("{0}")]
    Connection(String),

    /// Failed to build the HTTP request or client.
    #[error("request build error: {0}")]
    RequestBuild(String),

    /// Failed to read the response body.
    #[error("{0}")]
    Body(String),
}

/// Render an error with its full `source()` chain, outermost first.
fn with_causes(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let cause_text = cause.to_string();
        // Some layers repeat their inner error in their own message.
        if !message.ends_with(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }

    message
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_builder() {
            TransportError::RequestBuild(with_causes(&err))
        } else if err.is_body() || err.is_decode() {
            TransportError::Body(with_causes(&err))
        } else {
            TransportError::Connection(with_causes(&err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_display_is_bare_message() {
        let err = TransportError::Connection("ECONNREFUSED".into());
        assert_eq!(err.to_string(), "ECONNREFUSED");
    }

    #[derive(Debug, Error)]
    #[error("tcp connect error")]
    struct ConnectError(#[source] std::io::Error);

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct SendError(#[source] ConnectError);

    #[test]
    fn test_causes_are_appended() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "ECONNREFUSED");
        let err = SendError(ConnectError(io));

        assert_eq!(
            with_causes(&err),
            "error sending request: tcp connect error: ECONNREFUSED"
        );
    }

    #[test]
    fn test_repeated_cause_not_duplicated() {
        #[derive(Debug, Error)]
        #[error("client error: {0}")]
        struct Wrapper(#[source] std::io::Error);

        let io = std::io::Error::new(std::io::ErrorKind::Other, "reset");
        assert_eq!(with_causes(&Wrapper(io)), "client error: reset");
    }

    #[test]
    fn test_error_without_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "plain");
        assert_eq!(with_causes(&io), "plain");
    }
}
