//! Error types and HTTP error rendering for the gateway

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Transport failure reaching an upstream provider
    #[error("{provider} request failed: {source}")]
    Network {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status
    #[error("{provider} returned status {status}: {body}")]
    UpstreamStatus {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// Upstream payload did not have the expected shape
    #[error("{provider} returned an invalid response: {message}")]
    InvalidResponse {
        provider: &'static str,
        message: String,
    },

    /// Upstream succeeded but matched nothing
    #[error("No results found for '{query}'")]
    NoResults { query: String },

    /// Query parameter validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl GatewayError {
    /// Create a new invalid-response error
    pub fn invalid_response<S: Into<String>>(provider: &'static str, message: S) -> Self {
        Self::InvalidResponse {
            provider,
            message: message.into(),
        }
    }

    /// Create a new no-results error
    pub fn no_results<S: Into<String>>(query: S) -> Self {
        Self::NoResults {
            query: query.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with.
    ///
    /// Every failure collapses to a generic 500; the body message carries the
    /// distinction.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<QueryRejection> for GatewayError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

/// JSON body written for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: bool,
    pub message: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            GatewayError::Validation { .. } => warn!("Rejected request: {}", self),
            _ => error!("Request failed: {}", self),
        }

        let body = ErrorBody {
            error: true,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
