//! Normalized search result envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One page of search hits plus totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Requested page size (copied from the query).
    pub size: u32,

    /// Requested page (copied from the query).
    pub page: u32,

    /// Total number of matching documents.
    pub max: u64,

    /// Number of documents that can actually be paged through.
    #[serde(rename = "max_results")]
    pub max_results: u64,

    /// Source documents of the hits, in response order.
    pub hits: Vec<Map<String, Value>>,

    /// Search duration as reported by the store.
    pub duration: Option<Number>,
}

impl SearchResult {
    /// Stamp the caller's paging onto the result.
    pub fn with_page(mut self, page: u32, size: u32) -> Self {
        self.page = page;
        self.size = size;
        self
    }
}
