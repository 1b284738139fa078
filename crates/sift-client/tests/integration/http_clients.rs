//! HTTP clients against a local stub server.

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use sift_client::{
    ClientConfig, ElasticClient, Error, OrganizationManagerClient, SearchTransport, SpaceDirectory,
};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn auth(headers: &HeaderMap) -> Value {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map_or(Value::Null, |v| Value::String(v.to_string()))
}

async fn search(
    Path(index): Path<String>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Json<Value> {
    Json(json!({
        "took": 3,
        "hits": {
            "total": {"value": 1, "relation": "eq"},
            "hits": [{"_id": "1", "_index": index, "_source": {
                "auth": auth(&headers),
                "query": uri.query(),
                "body": body
            }}]
        }
    }))
}

async fn mapping(Path(indices): Path<String>, headers: HeaderMap) -> Json<Value> {
    Json(json!({
        "orga_space1_measurements": {"mappings": {"properties": {"uuid": {"type": "keyword"}}}},
        "_requested": {"indices": indices, "auth": auth(&headers)}
    }))
}

async fn store() -> String {
    spawn(
        Router::new()
            .route("/{index}/_search", post(search))
            .route("/{indices}/_mapping", get(mapping)),
    )
    .await
}

fn config(search_url: &str, spaces_endpoint: &str) -> ClientConfig {
    ClientConfig {
        search_url: search_url.to_string(),
        spaces_endpoint: spaces_endpoint.to_string(),
        timeout_secs: 5,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_elastic_search_posts_body_with_bearer_token() {
    let url = store().await;
    let client = ElasticClient::new(&config(&url, "")).unwrap();

    let response = client
        .search("orga_space1_measurements", r#"{"size":20}"#.to_string(), "tok")
        .await
        .unwrap();

    assert_eq!(response.total(), 1);
    let hit = &response.hits.unwrap().hits[0];
    let source = hit.source.as_ref().unwrap();
    assert_eq!(hit.index.as_deref(), Some("orga_space1_measurements"));
    assert_eq!(source["auth"], "Bearer tok");
    assert_eq!(source["query"], "track_total_hits=true");
    assert_eq!(source["body"], r#"{"size":20}"#);
}

#[tokio::test]
async fn test_elastic_search_without_token_sends_no_header() {
    let url = store().await;
    let client = ElasticClient::new(&config(&url, "")).unwrap();
    let response = client.search("idx", "{}".to_string(), "").await.unwrap();
    let source = response.hits.unwrap().hits[0].source.clone().unwrap();
    assert_eq!(source["auth"], Value::Null);
}

#[tokio::test]
async fn test_elastic_get_mappings() {
    let url = store().await;
    let client = ElasticClient::new(&config(&url, "")).unwrap();

    let mappings = client.get_mappings("orga_a*,orga_b*", "tok").await.unwrap();

    assert!(mappings.contains_key("orga_space1_measurements"));
    assert_eq!(mappings["_requested"]["indices"], "orga_a*,orga_b*");
    assert_eq!(mappings["_requested"]["auth"], "Bearer tok");
}

#[tokio::test]
async fn test_elastic_non_success_status() {
    let url = spawn(Router::new().route(
        "/{index}/_search",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "cluster down") }),
    ))
    .await;
    let client = ElasticClient::new(&config(&url, "")).unwrap();

    let err = client.search("idx", "{}".to_string(), "t").await.unwrap_err();

    match err {
        Error::UnexpectedStatus { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "cluster down");
        }
        other => unreachable!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_elastic_undecodable_body() {
    let url = spawn(Router::new().route(
        "/{index}/_search",
        post(|| async { "not json" }),
    ))
    .await;
    let client = ElasticClient::new(&config(&url, "")).unwrap();

    let err = client.search("idx", "{}".to_string(), "t").await.unwrap_err();
    assert!(matches!(err, Error::Decode { ref content, .. } if content == "not json"));
    assert_eq!(err.code(), 10014);
}

#[tokio::test]
async fn test_elastic_unreachable_is_http_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = ElasticClient::new(&config(&format!("http://{addr}"), "")).unwrap();

    let err = client.search("idx", "{}".to_string(), "t").await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert_eq!(err.code(), 10002);
}

#[tokio::test]
async fn test_organization_manager_lists_spaces() {
    let url = spawn(Router::new().route(
        "/api/v1.0/spaces",
        get(|headers: HeaderMap| async move {
            if auth(&headers) == "Bearer tok" {
                (StatusCode::OK, Json(json!(["orga_space1", "orga_space2"])))
            } else {
                (StatusCode::FORBIDDEN, Json(json!([])))
            }
        }),
    ))
    .await;
    let client =
        OrganizationManagerClient::new(&config("", &format!("{url}/api/v1.0/spaces"))).unwrap();

    let spaces = client.list_accessible_spaces("tok").await.unwrap();
    assert_eq!(spaces, vec!["orga_space1", "orga_space2"]);

    let err = client.list_accessible_spaces("other").await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedStatus { status: 403, .. }));
}
