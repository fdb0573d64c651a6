//! Generic HTTP transport infrastructure.
//!
//! This crate provides:
//!
//! - The [`Transport`] trait, the only thing API clients depend on
//! - [`HttpTransport`], a thin `reqwest` implementation
//! - Consistent error handling via [`TransportError`]
//!
//! HTTP error statuses are ordinary responses here. Only failures that
//! prevent a response from arriving surface as errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::{HttpMethod, HttpTransport, Transport, TransportRequest};
//!
//! let transport = HttpTransport::with_default_timeout()?;
//! let response = transport
//!     .perform(TransportRequest {
//!         method: HttpMethod::Get,
//!         url: "https://api.tauros.io/api/v1/trading/markets/".parse()?,
//!         headers: vec![("Content-Type", "application/json".into())],
//!         body: None,
//!     })
//!     .await?;
//! ```

mod client;
mod error;
mod transport;

pub use client::HttpTransport;
pub use error::TransportError;
pub use transport::{HttpMethod, Transport, TransportRequest, TransportResponse};
pub use url::Url;
