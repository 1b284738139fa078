//! Transport abstractions.
//!
//! The search service talks to the document store and to the space
//! directory only through these traits, so both can be swapped for
//! in-memory doubles.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use sift_query::SearchResponse;

use crate::error::{Error, Result};

/// Executes searches and schema lookups against the document store.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    /// Run a compiled search `body` against `index`.
    async fn search(&self, index: &str, body: String, token: &str) -> Result<SearchResponse>;

    /// Fetch the schemas of the comma-joined `indices`, keyed by index name.
    async fn get_mappings(&self, indices: &str, token: &str) -> Result<Map<String, Value>>;

    /// Short name for logging.
    fn name(&self) -> &str;
}

/// Lists the spaces a caller may access.
#[async_trait]
pub trait SpaceDirectory: Send + Sync {
    /// Space names (with their organization prefix) visible to `token`.
    async fn list_accessible_spaces(&self, token: &str) -> Result<Vec<String>>;
}

/// Attach the bearer token unless it is empty.
pub(crate) fn authorize(request: reqwest::RequestBuilder, token: &str) -> reqwest::RequestBuilder {
    if token.is_empty() {
        request
    } else {
        request.bearer_auth(token)
    }
}

/// Send `request` and return its body, failing on non-2xx statuses.
pub(crate) async fn send_for_body(request: reqwest::RequestBuilder, endpoint: &str) -> Result<String> {
    let response = request.send().await.map_err(|e| {
        log::error!("Request to {endpoint} failed: {e}");
        Error::Http(e)
    })?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        log::error!("Request to {endpoint} returned {status}");
        return Err(Error::UnexpectedStatus {
            status: status.as_u16(),
            endpoint: endpoint.to_string(),
            body,
        });
    }
    Ok(body)
}

/// Decode a JSON body, keeping the raw content on failure.
pub(crate) fn decode_body<T: DeserializeOwned>(body: String) -> Result<T> {
    serde_json::from_str(&body).map_err(|e| Error::decode(e, body))
}
