//! Router tests that never reach the database: validation, routing and rejections

use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

use equipment_panel::{
    api,
    config::AppConfig,
    repository::Repository,
    services::{tab_store::MemoryTabStore, Services},
    AppState,
};

fn app() -> Router {
    let config = AppConfig::default();
    // Lazy pool: no connection is attempted unless a handler runs a query
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database.url)
        .expect("valid database url");
    let repository = Repository::new(pool, &config.database.personnel_schema);
    let store = Arc::new(MemoryTabStore::new(Duration::from_secs(60)));
    let services = Services::with_store(repository, config.panel.clone(), store);

    api::router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_navigation_marks_active_tab() {
    let (status, body) = send(get("/api/v1/navigation?active_tab=users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sidebar"]["is_open"], false);

    let items = body["items"].as_array().expect("items");
    assert_eq!(items.len(), 3);
    let active: Vec<&Value> = items.iter().filter(|i| i["active"] == true).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["tab"], "users");
    assert_eq!(active[0]["icon"], "users");
}

#[tokio::test]
async fn test_equipment_type_with_empty_name_is_rejected_per_field() {
    let (status, body) = send(json_request(
        Method::POST,
        "/api/v1/equipment-types",
        json!({"equipment_name": "", "description": "Desktop computers"}),
    ))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["errors"]["equipment_name"][0],
        "The equipment name field is required."
    );
    assert!(body["errors"].get("description").is_none());
}

#[tokio::test]
async fn test_equipment_type_with_no_fields_reports_both() {
    let (status, body) = send(json_request(Method::POST, "/api/v1/equipment-types", json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errors"]["equipment_name"].is_array());
    assert!(body["errors"]["description"].is_array());
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let uri = format!("/api/v1/equipment-tab/{}/fields", Uuid::new_v4());
    let (status, body) = send(json_request(
        Method::PUT,
        &uri,
        json!({"field": "search_string", "value": "Dell"}),
    ))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchData");
}

#[tokio::test]
async fn test_unknown_signal_is_rejected() {
    let uri = format!("/api/v1/equipment-tab/{}/signals", Uuid::new_v4());
    let (status, _) = send(json_request(Method::POST, &uri, json!({"event": "dropEverything"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unknown_search_column_is_rejected() {
    let uri = format!("/api/v1/equipment-tab/{}/fields", Uuid::new_v4());
    let (status, _) = send(json_request(
        Method::PUT,
        &uri,
        json!({"field": "search_by", "value": "brand; DROP TABLE equipment"}),
    ))
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_session_id() {
    let (status, _) = send(get("/api/v1/equipment-tab/not-a-uuid")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_export_rejects_unknown_order_column() {
    let (status, _) = send(get("/api/v1/equipment/export?order_by=password")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
