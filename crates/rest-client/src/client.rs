//! `Transport` implementation on top of reqwest.

use crate::error::TransportError;
use crate::transport::{HttpMethod, Transport, TransportRequest, TransportResponse};
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, Method, Response};
use std::time::Duration;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport backed by a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new transport with the given request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::RequestBuild(e.to_string()))?;

        Ok(Self { client })
    }

    /// Create a new transport with default timeout.
    pub fn with_default_timeout() -> Result<Self, TransportError> {
        Self::new(DEFAULT_TIMEOUT)
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Reason phrase the server sent, or the canonical one for the status code.
///
/// hyper only records the phrase when it differs from the canonical one.
fn status_text(response: &Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        tracing::debug!(method = %request.method, url = %request.url, "HTTP request");

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url);

        for (key, value) in &request.headers {
            builder = builder.header(*key, value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let status_text = status_text(&response);
        let body = response.text().await?;

        tracing::debug!(status = status.as_u16(), "HTTP response");

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}
