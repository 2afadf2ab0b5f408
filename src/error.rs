//! Error types for the Hawkeye SDK

use std::time::Duration;
use thiserror::Error;

/// Main error type for the Hawkeye SDK
#[derive(Debug, Error)]
pub enum Error {
    /// Required claim fields were blank; no request was sent
    #[error("claim validation failed: missing required fields: {}", .missing_fields.join(", "))]
    Validation { missing_fields: Vec<String> },

    /// HTTP request failed
    #[error("HTTP request failed in {operation}: {source}")]
    Http {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Network connectivity error
    #[error("Network error in {operation}: {message}")]
    Network {
        operation: &'static str,
        message: String,
    },

    /// Request timeout error
    #[error("Request timeout after {timeout:?} in {operation}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    /// Non-2xx response carrying the server's error envelope.
    ///
    /// The message text matches the server's wording; the failing call is in
    /// `operation`.
    #[error("Api returned status code {}: {message}", .status.as_u16())]
    Api {
        operation: &'static str,
        status: reqwest::StatusCode,
        message: String,
    },

    /// Non-2xx response whose body was not a valid error envelope
    #[error("{operation}: Api returned status code {} with an unreadable error body: {reason}", .status.as_u16())]
    MalformedErrorBody {
        operation: &'static str,
        status: reqwest::StatusCode,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Server returned a body that does not match the expected shape
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Document category label that matches no known category
    #[error("invalid document type: {0}")]
    InvalidDocType(String),

    /// The server answered successfully but returned nothing for the lookup
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error - invalid client setup or parameters
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
}

/// Error categories for easier error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Client-side claim validation
    Validation,
    /// Connectivity, timeouts and other failures below HTTP
    Transport,
    /// Non-2xx responses from the API
    Api,
    /// Bodies that could not be decoded into the expected type
    Decode,
    /// Lookups that returned an empty collection
    NotFound,
    /// Client configuration errors
    Config,
}

impl Error {
    /// Create a new API error
    pub fn api(
        operation: &'static str,
        status: reqwest::StatusCode,
        message: impl Into<String>,
    ) -> Self {
        Self::Api {
            operation,
            status,
            message: message.into(),
        }
    }

    /// Create a new validation error from the names of the missing fields
    pub fn validation<I, S>(missing_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            missing_fields: missing_fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a new timeout error
    pub fn timeout(operation: &'static str, timeout: Duration) -> Self {
        Self::Timeout { operation, timeout }
    }

    /// Map a reqwest send failure into the transport error kinds
    pub(crate) fn from_send(operation: &'static str, err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Error::timeout(operation, timeout)
        } else if err.is_connect() {
            Error::Network {
                operation,
                message: format!("Connection failed: {}", err),
            }
        } else {
            Error::Http {
                operation,
                source: err,
            }
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Validation { .. } => ErrorCategory::Validation,
            Error::Http { source, .. } if source.is_decode() => ErrorCategory::Decode,
            Error::Http { .. } | Error::Network { .. } | Error::Timeout { .. } => {
                ErrorCategory::Transport
            }
            Error::Api { .. } | Error::MalformedErrorBody { .. } => ErrorCategory::Api,
            Error::Serialization(_) | Error::InvalidResponse(_) | Error::InvalidDocType(_) => {
                ErrorCategory::Decode
            }
            Error::NotFound(_) => ErrorCategory::NotFound,
            Error::Config(_) | Error::Url(_) => ErrorCategory::Config,
        }
    }

    /// HTTP status code of a non-2xx response, if this error came from one
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Api { status, .. } | Error::MalformedErrorBody { status, .. } => Some(*status),
            Error::Http { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Name of the SDK call that failed, for errors raised while talking to the API
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::Http { operation, .. }
            | Error::Network { operation, .. }
            | Error::Timeout { operation, .. }
            | Error::Api { operation, .. }
            | Error::MalformedErrorBody { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Names of the missing required fields for a validation error
    pub fn missing_fields(&self) -> Option<&[String]> {
        match self {
            Error::Validation { missing_fields } => Some(missing_fields),
            _ => None,
        }
    }

    /// Check if the error is a client-side validation failure
    pub fn is_validation_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Validation)
    }

    /// Check if the error is network-related
    pub fn is_transport_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Transport)
    }

    /// Check if the error is a non-2xx API response
    pub fn is_api_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Api)
    }

    /// Check if the error is an empty lookup result
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if the error is a client error (4xx status codes)
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_client_error())
    }

    /// Check if the error is a server error (5xx status codes)
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_server_error())
    }
}

/// Result type alias for the Hawkeye SDK
pub type Result<T> = std::result::Result<T, Error>;
