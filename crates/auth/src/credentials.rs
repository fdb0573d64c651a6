//! Secure API credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of the API secret
//! and ensures memory is zeroed on drop.
//!
//! Either half of the credential pair may be absent. A client without
//! credentials can still call public endpoints; private calls are refused
//! before anything is signed or sent.

use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "TAUROS_API_KEY";

/// Environment variable holding the base64-encoded API secret.
pub const API_SECRET_ENV: &str = "TAUROS_API_SECRET";

/// API credentials for authenticated requests.
///
/// The secret is wrapped in `SecretString` which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
///
/// `None` means the value was never provided and is not the same as an
/// empty string.
#[derive(Clone, Default)]
pub struct ApiCredentials {
    api_key: Option<String>,
    api_secret: Option<SecretString>,
}

impl ApiCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `TAUROS_API_KEY` - The API key (sent as the bearer token)
    /// - `TAUROS_API_SECRET` - The base64-encoded secret (private)
    ///
    /// Unset variables leave the corresponding field absent.
    pub fn from_env() -> Self {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let api_key = std::env::var(API_KEY_ENV).ok();
        let api_secret = std::env::var(API_SECRET_ENV).ok();

        if api_key.is_none() || api_secret.is_none() {
            tracing::debug!(
                has_api_key = api_key.is_some(),
                has_api_secret = api_secret.is_some(),
                "Incomplete credentials in environment, private endpoints unavailable"
            );
        }

        Self::new(api_key, api_secret)
    }

    /// Create credentials from explicit, possibly absent, values.
    pub fn new(api_key: Option<String>, api_secret: Option<String>) -> Self {
        Self {
            api_key,
            api_secret: api_secret.map(SecretString::from),
        }
    }

    /// Credentials for public endpoints only.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Get the API key (public, safe to log).
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Returns true if both the key and the secret are present.
    pub fn is_complete(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }

    /// Expose the key and secret together, or `None` if either is missing.
    ///
    /// **WARNING**: Only use the secret for cryptographic operations.
    /// Never log or display it.
    pub fn expose_pair(&self) -> Option<(&str, &str)> {
        match (&self.api_key, &self.api_secret) {
            (Some(key), Some(secret)) => Some((key.as_str(), secret.expose_secret())),
            _ => None,
        }
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field(
                "api_secret",
                &self.api_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
