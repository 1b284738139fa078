//! Document-store client over HTTP.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};

use sift_query::SearchResponse;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::transport::{authorize, decode_body, send_for_body, SearchTransport};

/// Search endpoint suffix; exact totals are always requested.
const SEARCH_SUFFIX: &str = "_search?track_total_hits=true";

/// Schema endpoint suffix.
const MAPPING_SUFFIX: &str = "_mapping";

/// [`SearchTransport`] backed by the store's REST API.
#[derive(Debug, Clone)]
pub struct ElasticClient {
    http: reqwest::Client,
    base_url: String,
}

impl ElasticClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientUnavailable`] when no search URL is configured
    /// or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.search_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::ClientUnavailable(
                "no search url configured".to_string(),
            ));
        }
        let http = config
            .http_client()
            .map_err(|e| Error::ClientUnavailable(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    /// URL of the search endpoint for `index`.
    pub fn search_url(&self, index: &str) -> String {
        format!("{}/{}/{}", self.base_url, index, SEARCH_SUFFIX)
    }

    /// URL of the mapping endpoint for comma-joined `indices`.
    pub fn mapping_url(&self, indices: &str) -> String {
        format!("{}/{}/{}", self.base_url, indices, MAPPING_SUFFIX)
    }
}

#[async_trait]
impl SearchTransport for ElasticClient {
    async fn search(&self, index: &str, body: String, token: &str) -> Result<SearchResponse> {
        let url = self.search_url(index);
        log::debug!("POST {url}");
        let request = authorize(self.http.post(&url), token)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        let body = send_for_body(request, &url).await?;
        decode_body(body)
    }

    async fn get_mappings(&self, indices: &str, token: &str) -> Result<Map<String, Value>> {
        let url = self.mapping_url(indices);
        log::debug!("GET {url}");
        let body = send_for_body(authorize(self.http.get(&url), token), &url).await?;
        decode_body(body)
    }

    fn name(&self) -> &str {
        "elastic"
    }
}
