//! HTTP-level harness around the full axum router.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use server_core::common::pagination::PagingLimits;
use server_core::kernel::{MockGravity, ServerDeps};
use server_core::server::build_app;
use std::sync::Arc;
use tower::ServiceExt;

/// Test harness that routes requests through the real middleware stack.
pub struct TestHarness {
    pub gravity: Arc<MockGravity>,
    app: Router,
}

impl TestHarness {
    pub fn new(gravity: MockGravity) -> Self {
        let gravity = Arc::new(gravity);
        let deps = ServerDeps::new(gravity.clone(), PagingLimits::default());
        Self {
            app: build_app(deps, &[]),
            gravity,
        }
    }

    /// Send a request and decode the JSON response body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    /// POST a GraphQL query, optionally as a signed-in user.
    pub async fn graphql(&self, query: &str, access_token: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::post("/graphql").header("content-type", "application/json");
        if let Some(token) = access_token {
            request = request.header("x-access-token", token);
        }
        let body = serde_json::json!({ "query": query }).to_string();
        self.send(request.body(Body::from(body)).expect("Invalid request"))
            .await
    }
}
