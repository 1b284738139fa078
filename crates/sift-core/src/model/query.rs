//! Inbound search query.

use serde::{Deserialize, Serialize};

use super::{Filter, MAX_RESULT_WINDOW};
use crate::error::{Error, Result};

/// Default number of hits per page.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// A paged, filtered search against one index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Number of hits per page.
    #[serde(default = "default_size")]
    pub size: u32,

    /// Zero-based page number.
    #[serde(default)]
    pub page: u32,

    /// Index (or comma-separated indices / wildcard) to search in. Required.
    pub index_name: String,

    /// Filters, combined with `AND`.
    #[serde(default)]
    pub filter: Vec<Filter>,

    /// Source properties to return for each hit; empty returns everything.
    #[serde(default, rename = "resultProperties")]
    pub result_properties: Vec<String>,
}

fn default_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for Query {
    fn default() -> Self {
        Self {
            size: default_size(),
            page: 0,
            index_name: String::new(),
            filter: Vec::new(),
            result_properties: Vec::new(),
        }
    }
}

impl Query {
    /// Create a query for an index with default paging.
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            ..Default::default()
        }
    }

    /// Append a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter.push(filter);
        self
    }

    /// Set page and page size.
    pub fn with_page(mut self, page: u32, size: u32) -> Self {
        self.page = page;
        self.size = size;
        self
    }

    /// Reject queries that do not name an index.
    ///
    /// An empty target would widen the search to every index of the store.
    pub fn validate(&self) -> Result<()> {
        if self.index_name.trim().is_empty() {
            return Err(Error::InvalidQueryMissingIndex);
        }
        Ok(())
    }

    /// Effective zero-based offset of the first hit.
    ///
    /// `page * size`, clamped so that `offset + size` stays within
    /// [`MAX_RESULT_WINDOW`]. Never negative.
    pub fn offset(&self) -> u64 {
        let requested = u64::from(self.page) * u64::from(self.size);
        let ceiling = u64::from(MAX_RESULT_WINDOW.saturating_sub(self.size));
        requested.min(ceiling)
    }
}
