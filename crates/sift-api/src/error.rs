//! Error types for sift-api

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sift_core::ErrorKind;

/// Result type alias for sift-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Code reported for failures without a dedicated code.
pub const UNKNOWN_ERROR_CODE: u32 = 50000;

/// Errors that can occur in sift-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from sift-client (including core errors)
    #[error(transparent)]
    Client(#[from] sift_client::Error),

    /// No bearer token was presented.
    #[error("no authentication-header found")]
    Unauthorized,

    /// The request body could not be read as a query.
    #[error("invalid request body: {message}")]
    InvalidBody {
        /// HTTP status chosen by the body extractor
        status: u16,
        /// Extractor message
        message: String,
    },

    /// The configuration file could not be read.
    #[error("unable to read config file {path}: {source}")]
    ConfigRead {
        /// Path of the file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for the gateway.
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    /// Returns the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Client(e) => e.kind(),
            Error::Unauthorized => ErrorKind::Unauthorized,
            Error::InvalidBody { .. } => ErrorKind::Validation,
            Error::ConfigRead { .. } | Error::ConfigParse(_) => ErrorKind::Configuration,
        }
    }

    /// Stable numeric error code reported to API consumers.
    pub fn code(&self) -> u32 {
        match self {
            Error::Client(e) => e.code(),
            Error::Unauthorized => 10012,
            Error::InvalidBody { .. } | Error::ConfigRead { .. } | Error::ConfigParse(_) => {
                UNKNOWN_ERROR_CODE
            }
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        let code = match self {
            Error::Client(e) => e.status(),
            Error::Unauthorized => 401,
            Error::InvalidBody { status, .. } => *status,
            Error::ConfigRead { .. } | Error::ConfigParse(_) => 500,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
    /// HTTP status code.
    pub status: u16,
    /// HTTP reason phrase.
    pub error: String,
    /// Stable sift error code.
    pub error_code: u32,
    /// Human-readable message, prefixed with the error code.
    pub message: String,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        let status = err.status();
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            error_code: err.code(),
            message: format!("{}: {err}", err.code()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ErrorBody::from(&self);
        if body.status >= 500 {
            tracing::error!(code = body.error_code, kind = ?self.kind(), "{self}");
        } else {
            tracing::warn!(code = body.error_code, kind = ?self.kind(), "{self}");
        }
        (self.status(), Json(body)).into_response()
    }
}
