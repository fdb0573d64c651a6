//! Authentication and signing for the Tauros API.
//!
//! This crate provides credential management, nonce generation and request
//! signing for authenticated calls.
//!
//! # Features
//!
//! - **Secure Credentials**: The API secret is wrapped in `SecretString` to
//!   prevent accidental logging and ensure memory is zeroed on drop.
//! - **Nonces**: Millisecond timestamps written without a decimal point.
//! - **SHA-256 + HMAC-SHA512 Signing**: The scheme required by Tauros.
//! - **Environment Loading**: Credentials can be loaded from environment
//!   variables or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{nonce, ApiCredentials, RequestSigner};
//!
//! let credentials = ApiCredentials::from_env();
//! let (_key, secret) = credentials.expose_pair().unwrap();
//!
//! let signer = RequestSigner::new(secret)?;
//! let nonce = nonce();
//! let signature = signer.sign(&nonce, "POST", "/api/v1/orders/", Some(r#"{"side":"BUY"}"#));
//! ```

mod credentials;
mod error;
mod nonce;
mod signer;

pub use credentials::{ApiCredentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::AuthError;
pub use nonce::{format_nonce, nonce};
pub use signer::{canonical_message, signature, RequestSigner, EMPTY_BODY};
