//! Error types for sift-core.
//!
//! Every variant carries the context an API consumer needs (offending
//! property, operator, or raw conversion message) so that outer layers can
//! surface it verbatim.

use thiserror::Error;

use crate::model::Operator;

/// Result type alias for sift-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of a failure.
///
/// None of the kinds are retried by sift itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input: missing bound/value, unknown operator, bad pattern.
    Validation,
    /// Serializing the compiled payload failed.
    Compilation,
    /// A schema or response payload could not be converted to typed data.
    Extraction,
    /// The document store or a collaborator failed or was unreachable.
    Transport,
    /// No usable credentials were presented.
    Unauthorized,
    /// The service configuration could not be loaded.
    Configuration,
}

/// Errors that can occur in sift-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A BETWEEN filter has no upper bound.
    #[error("unable to build between-filter, missing upper-bound: {property}")]
    InvalidBetweenFilterMissingUpperBound {
        /// Property of the offending filter
        property: String,
    },

    /// A BETWEEN filter has no lower bound.
    #[error("unable to build between-filter, missing lower-bound: {property}")]
    InvalidBetweenFilterMissingLowerBound {
        /// Property of the offending filter
        property: String,
    },

    /// A non-BETWEEN filter has no value.
    #[error("unable to build filter, missing value: {property}")]
    InvalidFilterMissingValue {
        /// Property of the offending filter
        property: String,
    },

    /// The query names no index to search in.
    #[error("unable to build query, missing index_name")]
    InvalidQueryMissingIndex,

    /// The filter uses a join token (AND/OR) as its own operator.
    #[error("unknown operator: {operator}")]
    UnknownOperator {
        /// The rejected operator
        operator: Operator,
    },

    /// The compiled payload could not be serialized.
    #[error("error creating query: {0}")]
    QueryCompilationFailed(#[source] serde_json::Error),

    /// A schema payload could not be converted into a mapping tree.
    #[error("error parsing mapping-result: {message}")]
    MappingExtraction {
        /// Raw conversion failure message
        message: String,
    },

    /// An index wildcard could not be turned into a usable pattern.
    #[error("invalid index pattern '{pattern}': {message}")]
    InvalidIndexPattern {
        /// The wildcard as supplied
        pattern: String,
        /// Pattern compiler message
        message: String,
    },
}

impl Error {
    /// Returns the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidBetweenFilterMissingUpperBound { .. }
            | Error::InvalidBetweenFilterMissingLowerBound { .. }
            | Error::InvalidFilterMissingValue { .. }
            | Error::InvalidQueryMissingIndex
            | Error::UnknownOperator { .. }
            | Error::InvalidIndexPattern { .. } => ErrorKind::Validation,
            Error::QueryCompilationFailed(_) => ErrorKind::Compilation,
            Error::MappingExtraction { .. } => ErrorKind::Extraction,
        }
    }

    /// Stable numeric error code reported to API consumers.
    pub fn code(&self) -> u32 {
        match self {
            Error::UnknownOperator { .. } => 10003,
            Error::QueryCompilationFailed(_) => 10004,
            Error::InvalidBetweenFilterMissingUpperBound { .. } => 10008,
            Error::InvalidBetweenFilterMissingLowerBound { .. } => 10009,
            Error::InvalidFilterMissingValue { .. } => 10010,
            Error::InvalidQueryMissingIndex => 10011,
            Error::MappingExtraction { .. } => 10020,
            Error::InvalidIndexPattern { .. } => 10021,
        }
    }

    /// HTTP status code this error maps to.
    pub fn status(&self) -> u16 {
        match self {
            Error::UnknownOperator { .. } => 404,
            Error::InvalidBetweenFilterMissingUpperBound { .. }
            | Error::InvalidBetweenFilterMissingLowerBound { .. }
            | Error::InvalidFilterMissingValue { .. }
            | Error::InvalidQueryMissingIndex
            | Error::InvalidIndexPattern { .. } => 400,
            Error::QueryCompilationFailed(_) | Error::MappingExtraction { .. } => 422,
        }
    }

    /// Creates a missing-value error for a property.
    pub fn missing_value<S: Into<String>>(property: S) -> Self {
        Error::InvalidFilterMissingValue {
            property: property.into(),
        }
    }

    /// Creates a mapping extraction error from any displayable cause.
    pub fn mapping_extraction<E: std::fmt::Display>(cause: E) -> Self {
        Error::MappingExtraction {
            message: cause.to_string(),
        }
    }
}
