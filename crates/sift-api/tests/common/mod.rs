//! Common test utilities for gateway integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use serde_json::{Map, Value, json};
use tower::ServiceExt;

use sift_api::{AppState, Server};
use sift_client::{Result, SearchService, SearchTransport, SpaceDirectory};
use sift_query::SearchResponse;

/// In-memory store answering searches with a fixed response and mapping
/// requests by space prefix.
pub struct MockStore {
    pub mappings: Map<String, Value>,
    pub response: Value,
    pub searches: Mutex<Vec<(String, Value, String)>>,
}

#[async_trait]
impl SearchTransport for MockStore {
    async fn search(&self, index: &str, body: String, token: &str) -> Result<SearchResponse> {
        let payload: Value = serde_json::from_str(&body).unwrap();
        self.searches
            .lock()
            .unwrap()
            .push((index.to_string(), payload, token.to_string()));
        Ok(serde_json::from_value(self.response.clone()).unwrap())
    }

    async fn get_mappings(&self, indices: &str, _token: &str) -> Result<Map<String, Value>> {
        let prefixes: Vec<&str> = indices.split(',').map(|w| w.trim_end_matches('*')).collect();
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

/// Space directory that returns the same spaces for every token.
pub struct MockSpaces(pub Vec<String>);

#[async_trait]
impl SpaceDirectory for MockSpaces {
    async fn list_accessible_spaces(&self, _token: &str) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

/// A router over mock collaborators.
pub struct TestApp {
    pub store: Arc<MockStore>,
    pub router: Router,
}

impl TestApp {
    pub fn new(auth_enabled: bool) -> Self {
        let store = Arc::new(MockStore {
            mappings: sample_mappings().as_object().cloned().unwrap(),
            response: sample_response(),
            searches: Mutex::new(Vec::new()),
        });
        let spaces = Arc::new(MockSpaces(vec![
            "orga_space1".to_string(),
            "orga_space2".to_string(),
            "security".to_string(),
        ]));
        let service = SearchService::new(store.clone(), spaces);
        let server = Server::with_state(
            "127.0.0.1:0".to_string(),
            AppState::new(service, auth_enabled),
        );
        Self {
            store,
            router: server.router(),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response: Response<Body> = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }
}

pub fn sample_mappings() -> Value {
    json!({
        "orga_space1_measurements": {"mappings": {"properties": {
            "uuid": {"type": "keyword"},
            "metadata": {"properties": {
                "customer": {"properties": {"customerId": {"type": "keyword"}}},
                "disabled": {"type": "object", "enabled": false}
            }},
            "massdata": {"properties": {
                "dateCreated": {"type": "date"},
                "size": {"type": "float"}
            }}
        }}},
        "orga_space2_files": {"mappings": {"properties": {
            "uuid": {"type": "keyword"},
            "raw": {"type": "binary", "index": false}
        }}},
        "securityinfo": {"mappings": {}},
        "security-auditlog-2024.01.01": {"mappings": {}}
    })
}

pub fn sample_response() -> Value {
    json!({
        "took": 9,
        "hits": {
            "total": {"value": 12000, "relation": "eq"},
            "hits": [
                {"_id": "1", "_index": "orga_space1_measurements",
                 "_source": {"uuid": "a", "metadata": {"customer": {"customerId": "efs"}}}}
            ]
        }
    })
}
