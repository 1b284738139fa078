//! Search service: the operations behind the gateway endpoints.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use serde_json::{Map, Value};

use sift_core::{
    clear_internal_indices, filter_by_wildcard, split_by_max_length, Criteria, Query,
    SearchResult,
};
use sift_mapping::{criteria_for_indices, property_names_for_indices};
use sift_query::{build_search, project};

use crate::config::{ClientConfig, DEFAULT_MAX_REQUEST_LINE};
use crate::elastic::ElasticClient;
use crate::error::Result;
use crate::organization::OrganizationManagerClient;
use crate::transport::{SearchTransport, SpaceDirectory};

/// Runs searches and schema introspection on behalf of a caller.
///
/// Schema lookups are scoped to the caller's accessible spaces: every space
/// name becomes an index wildcard, and the wildcards are requested in chunks
/// that keep each request line short enough for the store.
#[derive(Clone)]
pub struct SearchService {
    transport: Arc<dyn SearchTransport>,
    spaces: Arc<dyn SpaceDirectory>,
    max_request_line: usize,
}

impl SearchService {
    /// Create a service over the given collaborators.
    pub fn new(transport: Arc<dyn SearchTransport>, spaces: Arc<dyn SpaceDirectory>) -> Self {
        Self {
            transport,
            spaces,
            max_request_line: DEFAULT_MAX_REQUEST_LINE,
        }
    }

    /// Create a service with HTTP clients built from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = Arc::new(ElasticClient::new(config)?);
        let spaces = Arc::new(OrganizationManagerClient::new(config)?);
        Ok(Self::new(transport, spaces).with_max_request_line(config.max_request_line))
    }

    /// Override the request-line limit used when chunking index lists.
    pub fn with_max_request_line(mut self, max_request_line: usize) -> Self {
        self.max_request_line = max_request_line;
        self
    }

    /// Compile and run `query`, returning one page of results.
    pub async fn execute_search(&self, query: &Query, token: &str) -> Result<SearchResult> {
        let body = build_search(query)?;
        let start = Instant::now();
        let response = self.transport.search(&query.index_name, body, token).await?;
        log::debug!(
            "Search on '{}' via {} took {:?}",
            query.index_name,
            self.transport.name(),
            start.elapsed()
        );
        Ok(project(response).with_page(query.page, query.size))
    }

    /// Schemas of the accessible indices whose name matches `pattern`.
    pub async fn filtered_mappings(
        &self,
        token: &str,
        pattern: &str,
    ) -> Result<Map<String, Value>> {
        let spaces = self.spaces.list_accessible_spaces(token).await?;
        let wildcards: Vec<String> = spaces.iter().map(|space| format!("{space}*")).collect();

        let mut filtered = Map::new();
        for chunk in split_by_max_length(&wildcards, self.max_request_line) {
            let mappings = self.transport.get_mappings(&chunk.join(","), token).await?;
            filtered.extend(filter_by_wildcard(pattern, mappings)?);
        }
        log::debug!(
            "{} indices across {} spaces match '{}'",
            filtered.len(),
            spaces.len(),
            pattern
        );
        Ok(filtered)
    }

    /// Names of the accessible, non-internal indices matching `pattern`.
    pub async fn get_indices(&self, token: &str, pattern: &str) -> Result<BTreeSet<String>> {
        let mappings = self.filtered_mappings(token, pattern).await?;
        Ok(clear_internal_indices(mappings.into_iter().map(|(index, _)| index)))
    }

    /// Filterable criteria across the indices matching `pattern`.
    pub async fn get_criteria(&self, token: &str, pattern: &str) -> Result<Vec<Criteria>> {
        let mappings = self.filtered_mappings(token, pattern).await?;
        Ok(criteria_for_indices(&mappings)?)
    }

    /// Property paths across the indices matching `pattern`.
    pub async fn get_result_properties(
        &self,
        token: &str,
        pattern: &str,
    ) -> Result<BTreeSet<String>> {
        let mappings = self.filtered_mappings(token, pattern).await?;
        Ok(property_names_for_indices(&mappings)?)
    }
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("transport", &self.transport.name())
            .field("max_request_line", &self.max_request_line)
            .finish()
    }
}
