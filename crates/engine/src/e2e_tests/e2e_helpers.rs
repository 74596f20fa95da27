//! E2E test helpers for constructing the full application stack.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::api;
use crate::app::App;
use crate::infrastructure::movie_store::SqliteMovieStore;

/// Fully wired engine over a throwaway SQLite file.
pub struct TestEngine {
    router: Router,
    _dir: TempDir,
}

impl TestEngine {
    pub async fn start() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite:{}?mode=rwc", dir.path().join("movies.db").display());
        let store = SqliteMovieStore::connect(&url, "movies_db", None)
            .await
            .expect("connect store");

        Self {
            router: api::router(Arc::new(App::new(Arc::new(store)))),
            _dir: dir,
        }
    }

    /// Send a request and decode the JSON body (`Value::Null` when not JSON).
    pub async fn send(&self, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, "").await
    }
}
