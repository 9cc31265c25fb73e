// Shared by several test binaries; not every helper is used by each.
#![allow(dead_code)]

pub mod mock_upstream;

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use chat_proxy_app::http::build_router;
use chat_proxy_app::{AppContext, Config, Credentials};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_API_KEY: &str = "sk-test-4f2c9d0e7a";

pub fn app(base_url: &str, api_key: Option<&str>) -> Router {
    let config = Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        base_url: base_url.parse().unwrap(),
        credentials: api_key.map(Credentials::new),
        require_credentials: false,
    };
    build_router(AppContext::new(&config))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn post(app: Router, uri: &str, body: &Value) -> TestResponse {
    send(app, "POST", uri, body.to_string()).await
}

pub async fn send(app: Router, method: &str, uri: &str, body: String) -> TestResponse {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}
