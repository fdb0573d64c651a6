//! HMAC-SHA512 request signing for the Tauros API.
//!
//! The signed message is `nonce + METHOD + path + body`. It is first hashed
//! with SHA-256 and the raw digest is then authenticated with HMAC-SHA512
//! keyed by the base64-decoded API secret. The MAC is sent base64-encoded.

use crate::error::AuthError;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

type HmacSha512 = Hmac<Sha512>;

/// Body segment signed for requests without a body.
pub const EMPTY_BODY: &str = "{}";

/// Secrets are accepted with or without trailing padding.
const SECRET_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Build the canonical message that gets signed.
///
/// `body` is the serialized JSON body, or `None` for a bodyless request, in
/// which case the literal `{}` is signed even though nothing is transmitted.
/// `path` must start with `/` and exclude the host.
pub fn canonical_message(body: Option<&str>, nonce: &str, method: &str, path: &str) -> String {
    let body = body.unwrap_or(EMPTY_BODY);
    let method = method.to_ascii_uppercase();

    let mut message = String::with_capacity(nonce.len() + method.len() + path.len() + body.len());
    message.push_str(nonce);
    message.push_str(&method);
    message.push_str(path);
    message.push_str(body);
    message
}

/// Request signer keyed with a decoded API secret.
#[derive(Clone)]
pub struct RequestSigner {
    mac: HmacSha512,
}

impl RequestSigner {
    /// Create a signer from a base64-encoded API secret.
    ///
    /// # Errors
    /// Returns `AuthError::InvalidSecret` if the secret is not valid base64.
    pub fn new(secret_b64: &str) -> Result<Self, AuthError> {
        let key = Zeroizing::new(
            SECRET_ENGINE
                .decode(secret_b64)
                .map_err(|e| AuthError::InvalidSecret(e.to_string()))?,
        );

        let mac = HmacSha512::new_from_slice(&key)
            .map_err(|e| AuthError::InvalidSecret(e.to_string()))?;

        Ok(Self { mac })
    }

    /// Sign a request and return the base64-encoded signature.
    ///
    /// # Arguments
    /// * `nonce` - Nonce sent alongside the signature
    /// * `method` - HTTP method, any case
    /// * `path` - Request path without host or query string
    /// * `body` - Serialized JSON body, if one is transmitted
    pub fn sign(&self, nonce: &str, method: &str, path: &str, body: Option<&str>) -> String {
        let message = canonical_message(body, nonce, method, path);
        self.sign_message(&message)
    }

    /// Sign an already-built canonical message.
    pub fn sign_message(&self, message: &str) -> String {
        let digest = Sha256::digest(message.as_bytes());

        let mut mac = self.mac.clone();
        mac.update(&digest);
        STANDARD.encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Compute a request signature in one step.
///
/// # Errors
/// Returns `AuthError::InvalidSecret` if the secret is not valid base64.
pub fn signature(
    secret_b64: &str,
    nonce: &str,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> Result<String, AuthError> {
    Ok(RequestSigner::new(secret_b64)?.sign(nonce, method, path, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// base64("s3cr3t")
    const SECRET: &str = "czNjcjN0";
    const NONCE: &str = "1700000000123456";

    #[test]
    fn test_canonical_message_with_body() {
        assert_eq!(
            canonical_message(Some(r#"{"a":1}"#), NONCE, "post", "/api/test"),
            r#"1700000000123456POST/api/test{"a":1}"#
        );
    }

    #[test]
    fn test_canonical_message_without_body() {
        assert_eq!(
            canonical_message(None, NONCE, "GET", "/api/v1/balances/"),
            "1700000000123456GET/api/v1/balances/{}"
        );
    }

    #[test]
    fn test_sign_known_vector() {
        let signer = RequestSigner::new(SECRET).unwrap();
        let signature = signer.sign(NONCE, "POST", "/api/test", Some(r#"{"a":1}"#));

        assert_eq!(
            signature,
            "EPBgvaJqLIOK/EVfOnMvALmgp6QLKHaINPXL2XPDkzKn59ewk2TiaRLH6J6mtbVX3pSySpjKyPOay4RHzbA/eQ=="
        );
    }

    #[test]
    fn test_sign_known_vector_bodyless() {
        let signer = RequestSigner::new(SECRET).unwrap();

        assert_eq!(
            signer.sign(NONCE, "GET", "/api/v1/balances/", None),
            "SQAdhhfkQ3lSVVYSafr5WkEKrxwSAkm2XkhqJDpzcB4h7ITDawoJmIHNZu0OP3g6uMuLiaIUzZ1xgjnU5x4RJQ=="
        );
        assert_eq!(
            signer.sign(NONCE, "DELETE", "/api/v1/orders/42/", None),
            "yAPzMCfnVzKU416zd1QdzoMLXVSMM+TqiX8MbbqgrFiZ6oKLo0haIaJFiYrFxSnXddkmswk9iu6J4TULs14Vgw=="
        );
    }

    #[test]
    fn test_bodyless_signs_empty_object_literal() {
        let signer = RequestSigner::new(SECRET).unwrap();
        assert_eq!(
            signer.sign(NONCE, "GET", "/api/x", None),
            signer.sign(NONCE, "GET", "/api/x", Some("{}"))
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let a = signature(SECRET, NONCE, "PUT", "/api/test", Some(r#"{"b":[1,2]}"#)).unwrap();
        let b = signature(SECRET, NONCE, "PUT", "/api/test", Some(r#"{"b":[1,2]}"#)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_method_is_uppercased() {
        let signer = RequestSigner::new(SECRET).unwrap();
        assert_eq!(
            signer.sign(NONCE, "patch", "/api/test", None),
            signer.sign(NONCE, "PATCH", "/api/test", None)
        );
    }

    #[test]
    fn test_each_input_changes_signature() {
        let signer = RequestSigner::new(SECRET).unwrap();
        let base = signer.sign(NONCE, "POST", "/api/test", Some(r#"{"a":1}"#));

        assert_ne!(base, signer.sign("1700000000123457", "POST", "/api/test", Some(r#"{"a":1}"#)));
        assert_ne!(base, signer.sign(NONCE, "PUT", "/api/test", Some(r#"{"a":1}"#)));
        assert_ne!(base, signer.sign(NONCE, "POST", "/api/tests", Some(r#"{"a":1}"#)));
        assert_ne!(base, signer.sign(NONCE, "POST", "/api/test", Some(r#"{"a":2}"#)));
        assert_ne!(base, signer.sign(NONCE, "POST", "/api/test", None));
    }

    #[test]
    fn test_different_secret_changes_signature() {
        let a = signature(SECRET, NONCE, "GET", "/api/test", None).unwrap();
        let b = signature("b3RoZXI=", NONCE, "GET", "/api/test", None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_unpadded_secret_accepted() {
        // base64("s3cr3t!") is "czNjcjN0IQ=="
        let padded = signature("czNjcjN0IQ==", NONCE, "GET", "/api/test", None).unwrap();
        let unpadded = signature("czNjcjN0IQ", NONCE, "GET", "/api/test", None).unwrap();
        assert_eq!(padded, unpadded);
    }

    #[test]
    fn test_malformed_secret_rejected() {
        let result = RequestSigner::new("not base64!!");
        assert!(matches!(result, Err(AuthError::InvalidSecret(_))));

        let result = signature("%%%", NONCE, "GET", "/api/test", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_secret_still_signs() {
        // An empty key is a valid HMAC key.
        let signature = signature("", NONCE, "GET", "/api/test", None).unwrap();
        assert!(!signature.is_empty());
    }

    #[test]
    fn test_debug_redacts_key() {
        let signer = RequestSigner::new(SECRET).unwrap();
        let debug_str = format!("{:?}", signer);
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains(SECRET));
    }
}
