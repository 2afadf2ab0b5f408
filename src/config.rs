//! Configuration and builder patterns for the Hawkeye client

use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderValue;
use url::Url;

use crate::{
    client::{Client, ClientInner, RequestMiddleware},
    error::Error,
    Result,
};

/// Production API root
pub const PRODUCTION_BASE_URL: &str = "https://hawkeye.g2it.co/api";

/// QA API root
pub const QA_BASE_URL: &str = "https://qa.hawkeye.g2it.co/api";

/// Deployment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Qa,
}

impl Environment {
    /// API root for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Qa => QA_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => f.write_str("production"),
            Environment::Qa => f.write_str("qa"),
        }
    }
}

/// Path used to append log trail entries.
///
/// The server has exposed this route under two spellings across API versions.
/// Confirm which one your deployment serves; `Current` is used unless the
/// builder says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogTrailEndpoint {
    /// `/createLogTrailEntry`
    #[default]
    Current,
    /// `/createLogTailEntry`, served by older API versions
    Legacy,
}

impl LogTrailEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            LogTrailEndpoint::Current => "/createLogTrailEntry",
            LogTrailEndpoint::Legacy => "/createLogTailEntry",
        }
    }
}

/// Configuration for the Hawkeye client
#[derive(Clone)]
pub struct Config {
    pub auth_token: String,
    pub environment: Environment,
    pub base_url: Url,
    pub timeout: Duration,
    pub log_trail_endpoint: LogTrailEndpoint,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("auth_token", &"[REDACTED]")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("log_trail_endpoint", &self.log_trail_endpoint)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_token: String::new(),
            environment: Environment::Production,
            base_url: PRODUCTION_BASE_URL
                .parse()
                .expect("Default base URL should be valid"),
            timeout: Duration::from_secs(60),
            log_trail_endpoint: LogTrailEndpoint::Current,
        }
    }
}

impl Config {
    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.auth_token.trim().is_empty() {
            return Err(Error::Config("Auth token cannot be empty".to_string()));
        }

        if HeaderValue::from_str(&format!("Bearer {}", self.auth_token)).is_err() {
            return Err(Error::Config(
                "Auth token contains characters not allowed in an HTTP header".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(Error::Config("Timeout must be greater than zero".to_string()));
        }

        if self.base_url.scheme() != "https" && self.base_url.scheme() != "http" {
            return Err(Error::Config(format!(
                "Base URL must use http or https scheme, got: {}",
                self.base_url.scheme()
            )));
        }

        Ok(())
    }
}

/// Builder for creating Hawkeye clients
#[derive(Debug, Default)]
pub struct ClientBuilder {
    auth_token: Option<String>,
    environment: Option<Environment>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
    log_trail_endpoint: Option<LogTrailEndpoint>,
    middleware: Option<RequestMiddleware>,
}

impl ClientBuilder {
    /// Create a new client builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bearer token sent with every request
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Select the deployment; also selects its base URL
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Override the base URL, e.g. to point at a proxy or a local mock server
    pub fn base_url(mut self, url: impl TryInto<Url>) -> Result<Self> {
        self.base_url = Some(
            url.try_into()
                .map_err(|_| Error::Config("Invalid base URL".to_string()))?,
        );
        Ok(self)
    }

    /// Set the request timeout used by the default HTTP client
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom HTTP client
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Choose the log trail route (defaults to [`LogTrailEndpoint::Current`])
    pub fn log_trail_endpoint(mut self, endpoint: LogTrailEndpoint) -> Self {
        self.log_trail_endpoint = Some(endpoint);
        self
    }

    /// Set request middleware for logging and debugging
    pub fn middleware(mut self, middleware: RequestMiddleware) -> Self {
        self.middleware = Some(middleware);
        self
    }

    /// Enable request logging
    pub fn with_logging(mut self) -> Self {
        let middleware = self.middleware.take().unwrap_or_default();
        self.middleware = Some(middleware.with_full_logging());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<Client> {
        let environment = self.environment.unwrap_or_default();

        let config = Config {
            auth_token: self.auth_token.ok_or_else(|| {
                Error::Config("Auth token not provided. Set via builder.auth_token()".to_string())
            })?,
            environment,
            base_url: match self.base_url {
                Some(url) => url,
                None => Url::parse(environment.base_url())?,
            },
            timeout: self.timeout.unwrap_or(Duration::from_secs(60)),
            log_trail_endpoint: self.log_trail_endpoint.unwrap_or_default(),
        };

        config.validate()?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(config.timeout)
                .user_agent(format!("hawkeye-rust-sdk/{}", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?,
        };

        tracing::debug!(
            environment = %config.environment,
            base_url = %config.base_url,
            "Hawkeye client configured"
        );

        let inner = ClientInner {
            http_client,
            config,
            middleware: self.middleware.unwrap_or_default(),
        };

        Ok(Client::from_inner(inner))
    }
}
