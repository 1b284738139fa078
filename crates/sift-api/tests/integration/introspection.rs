//! `GET /v1.0/index`, `/v1.0/criteria`, `/v1.0/resultproperties`

use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_indices_skip_internal() {
    let app = TestApp::new(true);
    let (status, body) = app.get("/v1.0/index", Some("tok")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["orga_space1_measurements", "orga_space2_files"]));
}

#[tokio::test]
async fn test_indices_with_filter() {
    let app = TestApp::new(true);
    let (status, body) = app.get("/v1.0/index?filter=*files", Some("tok")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["orga_space2_files"]));
}

#[tokio::test]
async fn test_indices_require_token() {
    let app = TestApp::new(true);
    let (status, body) = app.get("/v1.0/index", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errorCode"], 10012);
}

#[tokio::test]
async fn test_criteria_for_named_index() {
    let app = TestApp::new(true);
    let (status, body) = app
        .get("/v1.0/criteria?index=measurements", Some("tok"))
        .await;

    assert_eq!(status, StatusCode::OK);
    let properties: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["property"].as_str().unwrap())
        .collect();
    assert_eq!(
        properties,
        vec![
            "massdata.dateCreated",
            "massdata.size",
            "metadata.customer.customerId",
            "uuid"
        ]
    );
    assert_eq!(body[1]["dataType"], "NUMBER");
    assert_eq!(body[1]["operators"].as_array().unwrap().len(), 7);
    assert_eq!(body[3]["operators"], json!(["EQ", "NOT", "LIKE"]));
}

#[tokio::test]
async fn test_criteria_across_all_indices() {
    let app = TestApp::new(true);
    let (status, body) = app.get("/v1.0/criteria?index=", Some("tok")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_result_properties() {
    let app = TestApp::new(true);
    let (status, body) = app
        .get("/v1.0/resultproperties?index=files", Some("tok"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["raw", "uuid"]));
}

#[tokio::test]
async fn test_result_properties_keep_disabled_leaves() {
    let app = TestApp::new(true);
    let (_, body) = app
        .get("/v1.0/resultproperties?index=measurements", Some("tok"))
        .await;

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(names.contains(&"metadata.disabled"));
}
