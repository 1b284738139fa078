//! Raw search response as returned by the document store.
//!
//! Only the parts the projection needs are modelled; everything else
//! (shards, scores, aggregations) is ignored on deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A raw search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Server-side duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub took: Option<Number>,

    /// The hits section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hits: Option<ResponseHits>,
}

/// The `hits` section of a search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseHits {
    /// Total number of matching documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<TotalHits>,

    /// The returned page of documents.
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// Total hit count, in either the current or the legacy wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TotalHits {
    /// Legacy bare number.
    Count(u64),
    /// `{value, relation}` object.
    Detailed {
        /// Hit count.
        value: u64,
        /// `eq` or `gte`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        relation: Option<String>,
    },
}

impl TotalHits {
    /// The reported count.
    pub fn value(&self) -> u64 {
        match self {
            TotalHits::Count(value) | TotalHits::Detailed { value, .. } => *value,
        }
    }
}

/// A single hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Document id.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Index the document lives in.
    #[serde(rename = "_index", default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,

    /// The stored document.
    #[serde(rename = "_source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Map<String, Value>>,
}

impl SearchResponse {
    /// Total hit count, or 0 when the response does not report one.
    pub fn total(&self) -> u64 {
        self.hits
            .as_ref()
            .and_then(|hits| hits.total.as_ref())
            .map_or(0, TotalHits::value)
    }
}
