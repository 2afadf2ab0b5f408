//! Client implementation for the Hawkeye API

use std::sync::Arc;

use bytes::Bytes;
use reqwest::{header::HeaderMap, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    claims::ClaimsService,
    config::{ClientBuilder, Config, Environment},
    doc_files::DocFilesService,
    error::Error,
    ins_companies::InsCompaniesService,
    log_trails::LogTrailsService,
    types::ApiResponse,
    Result,
};

/// Main client for interacting with the Hawkeye API.
///
/// Cloning is cheap: every clone and every resource service shares one
/// immutable configuration and HTTP client.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) inner: Arc<ClientInner>,
}

/// Middleware for request/response logging and debugging.
///
/// Events are emitted through `tracing` at debug level; install a subscriber
/// to see them. The bearer token is always redacted from header logs.
#[derive(Debug, Clone, Default)]
pub struct RequestMiddleware {
    pub log_requests: bool,
    pub log_responses: bool,
    pub log_headers: bool,
    pub log_body: bool,
}

impl RequestMiddleware {
    /// Enable request logging
    pub fn with_request_logging(mut self) -> Self {
        self.log_requests = true;
        self
    }

    /// Enable response logging
    pub fn with_response_logging(mut self) -> Self {
        self.log_responses = true;
        self
    }

    /// Enable header logging
    pub fn with_header_logging(mut self) -> Self {
        self.log_headers = true;
        self
    }

    /// Enable body logging
    pub fn with_body_logging(mut self) -> Self {
        self.log_body = true;
        self
    }

    /// Enable all logging
    pub fn with_full_logging(mut self) -> Self {
        self.log_requests = true;
        self.log_responses = true;
        self.log_headers = true;
        self.log_body = true;
        self
    }
}

/// A response whose body has been read exactly once
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: Bytes,
}

impl RawResponse {
    /// Decode the buffered body, naming the operation on failure
    pub(crate) fn decode<T: DeserializeOwned>(&self, operation: &str) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            Error::InvalidResponse(format!("failed to decode {} response: {}", operation, e))
        })
    }
}

/// Map a non-2xx status to a typed error.
///
/// The body is decoded as the generic [`ApiResponse`] envelope so the server's
/// message is preserved; a body that is not an envelope is reported as
/// [`Error::MalformedErrorBody`] rather than dropped.
pub(crate) fn check_response(operation: &'static str, status: StatusCode, body: &[u8]) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    let envelope: ApiResponse =
        serde_json::from_slice(body).map_err(|e| Error::MalformedErrorBody {
            operation,
            status,
            reason: e.to_string(),
        })?;

    Err(Error::api(operation, status, envelope.message))
}

#[derive(Debug)]
pub(crate) struct ClientInner {
    pub(crate) http_client: reqwest::Client,
    pub(crate) config: Config,
    pub(crate) middleware: RequestMiddleware,
}

impl ClientInner {
    /// Resolve an API path against the configured base URL.
    ///
    /// The base URL carries a path prefix (`/api`), so paths are appended
    /// rather than joined.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.config.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    /// Execute a request, map error statuses and decode the body into `T`
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        method: Method,
        url: Url,
        body: Option<Value>,
    ) -> Result<T> {
        let response = self.send(operation, method, url, body).await?;
        check_response(operation, response.status, &response.body)?;
        response.decode(operation)
    }

    /// Send a request and buffer its body.
    ///
    /// Status codes are not inspected here; callers pass the result through
    /// [`check_response`].
    pub(crate) async fn send(
        &self,
        operation: &'static str,
        method: Method,
        url: Url,
        body: Option<Value>,
    ) -> Result<RawResponse> {
        let mut request_builder = self
            .http_client
            .request(method.clone(), url.clone())
            .bearer_auth(&self.config.auth_token);

        if let Some(body) = &body {
            request_builder = request_builder.json(body);
        }

        if self.middleware.log_requests {
            tracing::debug!(operation, method = %method, url = %url, "HTTP request");

            if self.middleware.log_headers {
                if let Some(Ok(request)) = request_builder.try_clone().map(|rb| rb.build()) {
                    tracing::debug!(operation, headers = %redact_headers(request.headers()), "Request headers");
                }
            }

            if self.middleware.log_body {
                if let Some(body) = &body {
                    tracing::debug!(operation, body = %body, "Request body");
                }
            }
        }

        let response = request_builder.send().await.map_err(|e| {
            tracing::warn!(operation, url = %url, error = %e, "Hawkeye request failed");
            Error::from_send(operation, e, self.config.timeout)
        })?;

        let status = response.status();

        if self.middleware.log_responses {
            tracing::debug!(operation, status = %status, url = %response.url(), "HTTP response");

            if self.middleware.log_headers {
                tracing::debug!(operation, headers = ?response.headers(), "Response headers");
            }
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::warn!(operation, error = %e, "Failed to read response body");
            Error::from_send(operation, e, self.config.timeout)
        })?;

        if self.middleware.log_responses && self.middleware.log_body {
            tracing::debug!(operation, body = %String::from_utf8_lossy(&body), "Response body");
        }

        Ok(RawResponse { status, body })
    }
}

/// Render headers for logging with credentials masked
pub(crate) fn redact_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            if name == reqwest::header::AUTHORIZATION {
                format!("{}: Bearer [REDACTED]", name)
            } else {
                format!("{}: {}", name, value.to_str().unwrap_or("<binary>"))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl Client {
    /// Create a new client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a production client authenticated with `auth_token`
    pub fn new(auth_token: impl Into<String>) -> Result<Self> {
        Self::builder().auth_token(auth_token).build()
    }

    /// Create a client from ClientInner (internal use)
    pub(crate) fn from_inner(inner: ClientInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Claims: create, update and fetch
    pub fn claims(&self) -> ClaimsService {
        ClaimsService::new(Arc::clone(&self.inner))
    }

    /// Document files attached to claims
    pub fn doc_files(&self) -> DocFilesService {
        DocFilesService::new(Arc::clone(&self.inner))
    }

    /// Claim activity log
    pub fn log_trails(&self) -> LogTrailsService {
        LogTrailsService::new(Arc::clone(&self.inner))
    }

    /// Insurance company listing and search
    pub fn ins_companies(&self) -> InsCompaniesService {
        InsCompaniesService::new(Arc::clone(&self.inner))
    }

    /// Deployment this client was built for
    pub fn environment(&self) -> Environment {
        self.inner.config.environment
    }

    /// API root every request is sent under
    pub fn base_url(&self) -> &Url {
        &self.inner.config.base_url
    }
}
