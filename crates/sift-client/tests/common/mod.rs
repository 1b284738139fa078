//! Common test utilities for sift-client integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use sift_client::{Error, Result, SearchService, SearchTransport, SpaceDirectory};
use sift_query::SearchResponse;

/// In-memory document store.
///
/// Mapping requests are answered from a fixed index → schema map: every
/// index matching one of the requested `prefix*` wildcards is returned.
pub struct MockTransport {
    pub mappings: Map<String, Value>,
    pub response: Value,
    pub mapping_requests: Mutex<Vec<String>>,
    pub search_requests: Mutex<Vec<(String, Value, String)>>,
    pub fail_with_status: Option<u16>,
}

impl MockTransport {
    pub fn new(mappings: Value, response: Value) -> Self {
        Self {
            mappings: mappings.as_object().cloned().unwrap_or_default(),
            response,
            mapping_requests: Mutex::new(Vec::new()),
            search_requests: Mutex::new(Vec::new()),
            fail_with_status: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Self::new(json!({}), json!({}))
        }
    }

    fn check(&self, endpoint: &str) -> Result<()> {
        match self.fail_with_status {
            Some(status) => Err(Error::UnexpectedStatus {
                status,
                endpoint: endpoint.to_string(),
                body: String::new(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SearchTransport for MockTransport {
    async fn search(&self, index: &str, body: String, token: &str) -> Result<SearchResponse> {
        self.check(index)?;
        let payload: Value = serde_json::from_str(&body).unwrap();
        self.search_requests
            .lock()
            .unwrap()
            .push((index.to_string(), payload, token.to_string()));
        Ok(serde_json::from_value(self.response.clone()).unwrap())
    }

    async fn get_mappings(&self, indices: &str, _token: &str) -> Result<Map<String, Value>> {
        self.check(indices)?;
        self.mapping_requests.lock().unwrap().push(indices.to_string());
        let prefixes: Vec<&str> = indices
            .split(',')
            .map(|w| w.trim_end_matches('*'))
            .collect();
        Ok(self
            .mappings
            .iter()
            .filter(|(index, _)| prefixes.iter().any(|p| index.starts_with(p)))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Fixed list of accessible spaces.
pub struct MockSpaces {
    pub spaces: Vec<String>,
    pub tokens: Mutex<Vec<String>>,
}

impl MockSpaces {
    pub fn new(spaces: &[&str]) -> Self {
        Self {
            spaces: spaces.iter().map(|s| s.to_string()).collect(),
            tokens: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SpaceDirectory for MockSpaces {
    async fn list_accessible_spaces(&self, token: &str) -> Result<Vec<String>> {
        self.tokens.lock().unwrap().push(token.to_string());
        Ok(self.spaces.clone())
    }
}

/// Test harness bundling a service with its doubles.
pub struct TestHarness {
    pub transport: Arc<MockTransport>,
    pub spaces: Arc<MockSpaces>,
    pub service: SearchService,
}

impl TestHarness {
    pub fn new(transport: MockTransport, spaces: MockSpaces) -> Self {
        let transport = Arc::new(transport);
        let spaces = Arc::new(spaces);
        let service = SearchService::new(transport.clone(), spaces.clone());
        Self {
            transport,
            spaces,
            service,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new(
            MockTransport::new(sample_mappings(), sample_response()),
            MockSpaces::new(&["orga_space1", "orga_space2", "security"]),
        )
    }
}

/// Schemas of four user indices plus two internal ones.
pub fn sample_mappings() -> Value {
    json!({
        "orga_space1_measurements": {"mappings": {"properties": {
            "uuid": {"type": "keyword"},
            "massdata": {"properties": {
                "dateCreated": {"type": "date"},
                "size": {"type": "long"}
            }}
        }}},
        "orga_space1_files": {"mappings": {"properties": {
            "uuid": {"type": "keyword"},
            "blob": {"type": "binary", "index": false}
        }}},
        "orga_space2_measurements": {"mappings": {"properties": {
            "valid": {"type": "boolean"}
        }}},
        "security-auditlog-2021.05.01": {"mappings": {}},
        "securityinfo": {"mappings": {}},
        "other_space_measurements": {"mappings": {"properties": {
            "secret": {"type": "keyword"}
        }}}
    })
}

/// A two-hit search response.
pub fn sample_response() -> Value {
    json!({
        "took": 4,
        "hits": {
            "total": {"value": 2, "relation": "eq"},
            "hits": [
                {"_id": "1", "_index": "orga_space1_measurements", "_source": {"uuid": "a"}},
                {"_id": "2", "_index": "orga_space1_measurements", "_source": {"uuid": "b"}}
            ]
        }
    })
}
