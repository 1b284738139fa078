//! Error types for sift-client

use thiserror::Error;

use sift_core::ErrorKind;

/// Result type alias for sift-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sift-client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from sift-core
    #[error(transparent)]
    Core(#[from] sift_core::Error),

    /// The request could not be sent or its body not read.
    #[error("search failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote answered with a non-2xx status.
    #[error("unexpected status {status} from {endpoint}")]
    UnexpectedStatus {
        /// HTTP status returned
        status: u16,
        /// Endpoint that was called
        endpoint: String,
        /// Response body, for diagnostics
        body: String,
    },

    /// A response body could not be decoded.
    #[error("unable to extract string to object: {message}")]
    Decode {
        /// Decoder message
        message: String,
        /// The undecodable body
        content: String,
    },

    /// No usable HTTP client could be built.
    #[error("unable to get search client: {0}")]
    ClientUnavailable(String),
}

impl Error {
    /// Creates a decode error from a serde failure and the offending body.
    pub fn decode(cause: serde_json::Error, content: impl Into<String>) -> Self {
        Error::Decode {
            message: cause.to_string(),
            content: content.into(),
        }
    }

    /// Returns the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Core(e) => e.kind(),
            Error::Decode { .. } => ErrorKind::Extraction,
            Error::Http(_) | Error::UnexpectedStatus { .. } | Error::ClientUnavailable(_) => {
                ErrorKind::Transport
            }
        }
    }

    /// Stable numeric error code reported to API consumers.
    pub fn code(&self) -> u32 {
        match self {
            Error::Core(e) => e.code(),
            Error::UnexpectedStatus { .. } => 10001,
            Error::Http(_) => 10002,
            Error::Decode { .. } => 10014,
            Error::ClientUnavailable(_) => 10015,
        }
    }

    /// HTTP status code this error maps to.
    pub fn status(&self) -> u16 {
        match self {
            Error::Core(e) => e.status(),
            Error::ClientUnavailable(_) => 500,
            Error::Http(_) | Error::UnexpectedStatus { .. } | Error::Decode { .. } => 422,
        }
    }
}
