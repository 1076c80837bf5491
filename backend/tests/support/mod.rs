#![allow(dead_code)]

use std::sync::Mutex;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use numstats::config::ServerConfig;
use numstats::http::{create_router, AppState};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily set (`Some`) or removed (`None`).
///
/// Holds a process-wide lock so parallel tests never observe each other's
/// variables; previous values are restored on drop, including on panic.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = EnvRestore::apply(changes);
    f()
}

struct EnvRestore {
    previous: Vec<(String, Option<String>)>,
}

impl EnvRestore {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let previous = changes
            .iter()
            .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
            .collect();

        for (key, value) in changes {
            set_or_remove(key, *value);
        }

        Self { previous }
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        // Reverse order so a key listed twice ends at its original value.
        for (key, value) in self.previous.drain(..).rev() {
            set_or_remove(&key, value.as_deref());
        }
    }
}

fn set_or_remove(key: &str, value: Option<&str>) {
    match value {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
}

/// Router with default configuration.
pub fn test_router() -> Router {
    create_router(AppState::new(ServerConfig::default()))
}

/// Send a request and decode the JSON response body (`Value::Null` if empty or not JSON).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Build a `POST` with a JSON body.
pub fn post_json(path: &str, body: &Value) -> Request<Body> {
    Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).unwrap()
}
