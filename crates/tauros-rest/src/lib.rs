//! Tauros REST API client.
//!
//! This crate provides a signed request dispatcher for the Tauros REST API:
//!
//! - **Public and private calls**: Every verb takes an `is_public` flag;
//!   private calls carry a bearer token, a nonce and an HMAC signature
//! - **Uniform results**: Decoded JSON and HTTP error statuses resolve as
//!   [`ApiResponse`]; only failures without a usable response are errors
//! - **Pluggable transport**: Any [`rest_client::Transport`] can carry the
//!   requests; `reqwest` is the default
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use tauros_rest::{ApiResponse, TaurosClient};
//!
//! let client = TaurosClient::from_env()?;
//!
//! // Public endpoint
//! let markets = client.get("/api/v1/trading/markets/", None, true).await?;
//!
//! // Private endpoint
//! let order = json!({"market": "BTC-MXN", "side": "BUY", "type": "LIMIT", "amount": "0.01", "price": "300000"});
//! match client.post("/api/v1/trading/placeorder/", Some(&order), false).await? {
//!     ApiResponse::Ok(body) => println!("{}", body),
//!     ApiResponse::HttpError { status_code, message } => eprintln!("{} {}", status_code, message),
//! }
//! ```

mod client;
mod error;
mod responses;

pub use client::{ApiRequest, DispatchResult, TaurosClient};
pub use error::TaurosError;
pub use responses::{ApiResponse, MISSING_CREDENTIALS_MESSAGE};

pub use auth::ApiCredentials;
pub use common::TaurosEnvironment;
pub use rest_client::{HttpMethod, HttpTransport, Transport};
