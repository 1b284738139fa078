//! Outbound search payload.

use serde::{Deserialize, Serialize};

/// The JSON body of a search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPayload {
    /// Offset of the first hit.
    pub from: u64,

    /// Number of hits to return.
    pub size: u32,

    /// The compiled query.
    pub query: QueryClause,

    /// Source properties to return; empty returns the whole document.
    #[serde(rename = "_source")]
    pub source: Vec<String>,
}

/// Wrapper for the `query_string` query type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryClause {
    /// The query-string query.
    pub query_string: QueryString,
}

/// A query-string query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryString {
    /// The compiled expression.
    pub query: String,

    /// Whether wildcard terms are analyzed.
    pub analyze_wildcard: bool,
}

impl SearchPayload {
    /// Create a payload with wildcard analysis enabled.
    pub fn new(from: u64, size: u32, expression: String, source: Vec<String>) -> Self {
        Self {
            from,
            size,
            query: QueryClause {
                query_string: QueryString {
                    query: expression,
                    analyze_wildcard: true,
                },
            },
            source,
        }
    }

    /// The compiled expression.
    pub fn expression(&self) -> &str {
        &self.query.query_string.query
    }
}
