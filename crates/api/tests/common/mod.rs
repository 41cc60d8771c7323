#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use fleet_api::config::{LogFormat, ServerConfig};
use fleet_api::router::build_app_router;
use fleet_api::state::AppState;
use fleet_core::storage::MemoryShipStorage;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router backed by a fresh in-memory store.
///
/// The returned router is cheap to clone and every clone shares the same
/// store, so one test can issue several requests against the same data.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState::new(config.clone(), Arc::new(MemoryShipStorage::new()));
    build_app_router(state, &config)
}

/// Epoch milliseconds for January 1st of `year`.
pub fn year_millis(year: i32) -> i64 {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .unwrap()
        .timestamp_millis()
}

/// A complete create body.
pub fn ship_json(
    name: &str,
    planet: &str,
    ship_type: &str,
    year: i32,
    is_used: bool,
    speed: f64,
    crew_size: i32,
) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "planet": planet,
        "shipType": ship_type,
        "prodDate": year_millis(year),
        "isUsed": is_used,
        "speed": speed,
        "crewSize": crew_size,
    })
}

/// Seed three ships and return the app.
///
/// | id | name  | planet | type     | year | used  | speed | crew | rating |
/// |----|-------|--------|----------|------|-------|-------|------|--------|
/// | 1  | Orion | Earth  | TRANSPORT| 3000 | false | 0.5   | 100  | 2.0    |
/// | 2  | Vega  | Mars   | MILITARY | 3010 | true  | 0.9   | 10   | 3.6    |
/// | 3  | Lyra  | Earth  | MERCHANT | 2900 | false | 0.3   | 500  | 0.2    |
pub async fn seeded_app() -> Router {
    let app = build_test_app();
    for body in [
        ship_json("Orion", "Earth", "TRANSPORT", 3000, false, 0.5, 100),
        ship_json("Vega", "Mars", "MILITARY", 3010, true, 0.9, 10),
        ship_json("Lyra", "Earth", "MERCHANT", 2900, false, 0.3, 500),
    ] {
        let response = post_json(app.clone(), "/rest/ships", body).await;
        assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    }
    app
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

/// POST an arbitrary (possibly empty or malformed) body.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    send(app, Method::POST, uri, Body::from(body)).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Names of the ships in a `{ "data": [...] }` list response.
pub async fn names(response: Response) -> Vec<String> {
    body_json(response).await["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect()
}
