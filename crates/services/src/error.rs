//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors emitted by `ApiClient` and the API traits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request could not complete: {0}")]
    Network(#[source] reqwest::Error),
    #[error("not authorized ({status})")]
    Auth {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("request rejected ({status})")]
    Validation {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("server failure ({status})")]
    Server {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("unexpected status {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("response body could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("invalid request path {path:?}")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("http client could not be built: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// Classify a non-success status, keeping the server's `message` if it sent one.
    #[must_use]
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        match status.as_u16() {
            401 | 403 => Self::Auth { status, message },
            400 | 422 => Self::Validation { status, message },
            500..=599 => Self::Server { status, message },
            _ => Self::Status { status, message },
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Auth { status, .. }
            | Self::Validation { status, .. }
            | Self::Server { status, .. }
            | Self::Status { status, .. } => Some(*status),
            Self::Network(err) | Self::Decode(err) => err.status(),
            Self::InvalidPath { .. } | Self::Client(_) => None,
        }
    }

    /// The user-facing message the server attached to a failure, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Auth { message, .. }
            | Self::Validation { message, .. }
            | Self::Server { message, .. }
            | Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Errors emitted while resolving `ApiConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid api url {raw:?}: {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("api url must be http or https: {raw:?}")]
    UnsupportedScheme { raw: String },
}
