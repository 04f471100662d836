#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use helpdesk_api::{build_router, AppContext};
use helpdesk_core::{Clock, MockClock};
use helpdesk_domain::Config;
use helpdesk_infra::store::seeded_store;
use serde_json::Value;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const INDEX_HTML: &str = "<!doctype html><title>Helpdesk</title><div id=\"root\"></div>";

/// Fixed instant the demo data is laid out around.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap()
}

/// Router over a seeded store, a mock clock and a temporary SPA bundle.
pub struct TestApp {
    pub ctx: Arc<AppContext>,
    pub router: Router,
    pub clock: MockClock,
    /// Keep the static directory alive for the lifetime of the app.
    _static_dir: TempDir,
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with(Config::default())
}

pub fn setup_test_app_with(mut config: Config) -> TestApp {
    let static_dir = tempfile::tempdir().expect("failed to create static dir");
    std::fs::create_dir_all(static_dir.path().join("assets")).expect("assets dir");
    std::fs::write(static_dir.path().join("index.html"), INDEX_HTML).expect("index.html");
    std::fs::write(static_dir.path().join("assets/index-9c1d.js"), "export {}").expect("bundle");
    config.server.static_dir = static_dir.path().to_string_lossy().into_owned();

    let clock = MockClock::new(now());
    let store = Arc::new(seeded_store(now()).expect("seed should succeed"));
    let dyn_clock: Arc<dyn Clock> = Arc::new(clock.clone());
    let ctx = Arc::new(
        AppContext::with_parts(config, store, dyn_clock).expect("context should build"),
    );
    let router = build_router(Arc::clone(&ctx)).expect("router should build");

    TestApp { ctx, router, clock, _static_dir: static_dir }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Issue a request and decode the JSON response (`Null` for empty bodies).
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, json)
    }

    pub async fn raw_get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }
}
