// tests/support/helpers.rs
use super::memory::MemoryStore;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use newsboard_core::application::{ports::time::Clock, services::ApplicationServices};
use newsboard_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

/// Timestamp stamped on everything created during a test.
pub const FROZEN_NOW: &str = "2024-01-01T00:00:00.000Z";

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }
}

pub fn build_services(store: &MemoryStore) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(FixedClock),
    ))
}

pub fn make_router_for(store: &MemoryStore) -> axum::Router {
    let state = HttpState {
        services: build_services(store),
    };
    build_router(state, &["*".to_string()])
}

/// Router over a freshly seeded store.
pub fn make_test_router() -> axum::Router {
    make_router_for(&MemoryStore::seeded())
}

/// Send one request and return the status with the decoded JSON body
/// (`Value::Null` for an empty body).
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match payload {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body should be JSON")
    };
    (status, json)
}

pub async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// Assert the uniform `{"msg": ...}` error body.
pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode) {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    let msg = match expected {
        StatusCode::BAD_REQUEST => "Bad request",
        StatusCode::NOT_FOUND => "Not found",
        _ => "Internal server error",
    };
    assert_eq!(body, &serde_json::json!({ "msg": msg }));
}

pub fn ids(items: &Value, key: &str) -> Vec<i64> {
    items
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item[key].as_i64().expect("numeric id"))
        .collect()
}
