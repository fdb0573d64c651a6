//! Tauros REST API client.

use crate::error::TaurosError;
use crate::responses::ApiResponse;
use auth::{ApiCredentials, RequestSigner};
use common::TaurosEnvironment;
use rest_client::{
    HttpMethod, HttpTransport, Transport, TransportError, TransportRequest, TransportResponse, Url,
};
use serde_json::Value;

const CONTENT_TYPE_HEADER: &str = "Content-Type";
const AUTHORIZATION_HEADER: &str = "Authorization";
const NONCE_HEADER: &str = "Taur-Nonce";
const SIGNATURE_HEADER: &str = "Taur-Signature";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Outcome of a call: resolved responses (including HTTP error statuses) in
/// `Ok`, failures that produced no usable response in `Err`.
pub type DispatchResult = Result<ApiResponse, TaurosError>;

/// A single API call: target, verb and optional inputs.
///
/// `None` means "not supplied". Query parameters are only used by GET and
/// keep the order given.
#[derive(Debug, Clone, Copy)]
pub struct ApiRequest<'a> {
    pub method: HttpMethod,
    pub path: &'a str,
    pub body: Option<&'a Value>,
    pub params: Option<&'a [(&'a str, &'a str)]>,
}

impl<'a> ApiRequest<'a> {
    /// A request without body or query parameters.
    pub fn new(method: HttpMethod, path: &'a str) -> Self {
        Self {
            method,
            path,
            body: None,
            params: None,
        }
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Option<&'a Value>) -> Self {
        self.body = body;
        self
    }

    /// Attach query parameters.
    pub fn with_params(mut self, params: Option<&'a [(&'a str, &'a str)]>) -> Self {
        self.params = params;
        self
    }

    /// Serialize the body once, for both signing and sending.
    ///
    /// A JSON `null` is treated the same as no body.
    fn serialized_body(&self) -> Result<Option<String>, TaurosError> {
        self.body
            .filter(|body| !body.is_null())
            .map(|body| {
                serde_json::to_string(body).map_err(|e| TaurosError::Serialization(e.to_string()))
            })
            .transpose()
    }
}

/// Tauros REST API client with optional authentication.
///
/// Holds no mutable state; a single instance can serve concurrent calls.
pub struct TaurosClient<T = HttpTransport> {
    transport: T,
    credentials: ApiCredentials,
    environment: TaurosEnvironment,
}

impl TaurosClient<HttpTransport> {
    /// Create a client using the default reqwest transport.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        credentials: ApiCredentials,
        environment: TaurosEnvironment,
    ) -> Result<Self, TaurosError> {
        let transport =
            HttpTransport::with_default_timeout().map_err(|e| TaurosError::Client(e.to_string()))?;

        Ok(Self::with_transport(credentials, environment, transport))
    }

    /// Create a client from raw construction parameters.
    ///
    /// # Arguments
    /// * `api_key` - Bearer token, or `None` for public access only
    /// * `api_secret` - Base64-encoded secret, or `None`
    /// * `staging` - Target the staging environment instead of production
    pub fn from_parts(
        api_key: Option<String>,
        api_secret: Option<String>,
        staging: bool,
    ) -> Result<Self, TaurosError> {
        Self::new(
            ApiCredentials::new(api_key, api_secret),
            TaurosEnvironment::from_staging_flag(staging),
        )
    }

    /// Create a client from `TAUROS_API_KEY`, `TAUROS_API_SECRET` and
    /// `TAUROS_ENVIRONMENT`.
    pub fn from_env() -> Result<Self, TaurosError> {
        Self::new(ApiCredentials::from_env(), TaurosEnvironment::from_env())
    }
}

impl<T: Transport> TaurosClient<T> {
    /// Create a client that sends requests through `transport`.
    pub fn with_transport(
        credentials: ApiCredentials,
        environment: TaurosEnvironment,
        transport: T,
    ) -> Self {
        Self {
            transport,
            credentials,
            environment,
        }
    }

    /// Get the environment this client is connected to.
    pub fn environment(&self) -> TaurosEnvironment {
        self.environment
    }

    /// Get the REST base URL.
    pub fn base_url(&self) -> &'static str {
        self.environment.rest_base_url()
    }

    /// Get the API key (for logging/debugging).
    pub fn api_key(&self) -> Option<&str> {
        self.credentials.api_key()
    }

    /// Returns true if private endpoints can be called.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_complete()
    }

    // ========================================================================
    // Verbs
    // ========================================================================

    /// GET `path` with optional query parameters.
    pub async fn get(
        &self,
        path: &str,
        params: Option<&[(&str, &str)]>,
        is_public: bool,
    ) -> DispatchResult {
        let request = ApiRequest::new(HttpMethod::Get, path).with_params(params);
        self.dispatch(request, !is_public).await
    }

    /// POST `path` with an optional JSON body.
    pub async fn post(&self, path: &str, body: Option<&Value>, is_public: bool) -> DispatchResult {
        let request = ApiRequest::new(HttpMethod::Post, path).with_body(body);
        self.dispatch(request, !is_public).await
    }

    /// PUT `path` with an optional JSON body.
    pub async fn put(&self, path: &str, body: Option<&Value>, is_public: bool) -> DispatchResult {
        let request = ApiRequest::new(HttpMethod::Put, path).with_body(body);
        self.dispatch(request, !is_public).await
    }

    /// PATCH `path` with an optional JSON body.
    pub async fn patch(&self, path: &str, body: Option<&Value>, is_public: bool) -> DispatchResult {
        let request = ApiRequest::new(HttpMethod::Patch, path).with_body(body);
        self.dispatch(request, !is_public).await
    }

    /// DELETE `path`.
    pub async fn delete(&self, path: &str, is_public: bool) -> DispatchResult {
        let request = ApiRequest::new(HttpMethod::Delete, path);
        self.dispatch(request, !is_public).await
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Build, sign (when `authenticated`), send and normalize one request.
    ///
    /// Private calls on a client missing either credential resolve to a 401
    /// [`ApiResponse::HttpError`] without signing or sending anything.
    pub async fn dispatch(&self, request: ApiRequest<'_>, authenticated: bool) -> DispatchResult {
        let key_pair = if authenticated {
            match self.credentials.expose_pair() {
                Some(pair) => Some(pair),
                None => {
                    tracing::warn!(
                        method = %request.method,
                        path = %request.path,
                        "Private request without credentials"
                    );
                    return Ok(ApiResponse::missing_credentials());
                }
            }
        } else {
            None
        };

        let url = self.build_url(request.path, request.method, request.params)?;
        let body = request.serialized_body()?;

        let mut headers = vec![(CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE.to_string())];

        if let Some((api_key, secret)) = key_pair {
            let signer = RequestSigner::new(secret)?;
            let nonce = auth::nonce();
            let signature = signer.sign(
                &nonce,
                request.method.as_str(),
                request.path,
                body.as_deref(),
            );

            tracing::trace!(nonce = %nonce, "Signed request");

            headers.push((AUTHORIZATION_HEADER, format!("Bearer {}", api_key)));
            headers.push((NONCE_HEADER, nonce));
            headers.push((SIGNATURE_HEADER, signature));
        }

        tracing::debug!(
            method = %request.method,
            url = %url,
            authenticated = authenticated,
            has_body = body.is_some(),
            "Dispatching request"
        );

        let response = self
            .transport
            .perform(TransportRequest {
                method: request.method,
                url,
                headers,
                body,
            })
            .await
            .map_err(|e: TransportError| {
                tracing::warn!(
                    method = %request.method,
                    path = %request.path,
                    error = %e,
                    "Transport failure"
                );
                TaurosError::Transport(e.to_string())
            })?;

        normalize(response)
    }

    /// Build the full URL. Query parameters are only appended for GET.
    fn build_url(
        &self,
        path: &str,
        method: HttpMethod,
        params: Option<&[(&str, &str)]>,
    ) -> Result<Url, TaurosError> {
        let raw = format!("{}{}", self.base_url(), path);
        let mut url = Url::parse(&raw).map_err(|e| TaurosError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        match params {
            Some(params) if method == HttpMethod::Get && !params.is_empty() => {
                url.query_pairs_mut().clear().extend_pairs(params.iter());
            }
            _ => {}
        }

        Ok(url)
    }
}

/// Map a transport response onto the resolved result shape.
///
/// Error statuses carry the status text; their body is never read.
fn normalize(response: TransportResponse) -> DispatchResult {
    if !response.is_success() {
        tracing::debug!(
            status = response.status,
            status_text = %response.status_text,
            "HTTP error response"
        );
        return Ok(ApiResponse::HttpError {
            status_code: response.status,
            message: response.status_text,
        });
    }

    response
        .json()
        .map(ApiResponse::Ok)
        .map_err(|e| TaurosError::Decode(e.to_string()))
}

impl<T> std::fmt::Debug for TaurosClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaurosClient")
            .field("environment", &self.environment)
            .field("base_url", &self.environment.rest_base_url())
            .field("credentials", &self.credentials)
            .finish()
    }
}
