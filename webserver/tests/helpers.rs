//! Test helper utilities for webserver integration tests

use std::net::SocketAddr;
use std::sync::Arc;

use arena::{Arena, ArenaConfig, MemoryLedger};
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use shared::Item;
use tower::ServiceExt;
use webserver::WebServer;

pub fn test_address() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

pub fn tweets(ids: &[&str]) -> Vec<Item> {
    ids.iter().map(|id| Item::new(*id, format!("tweet {id}"))).collect()
}

/// Router over an arena backed by the given in-memory ledger
pub fn router_over(ledger: &MemoryLedger) -> Router {
    let arena = Arena::new(
        Arc::new(ledger.clone()),
        Arc::new(ledger.clone()),
        ArenaConfig::default(),
    )
    .unwrap();
    WebServer::new(arena, test_address()).build_router()
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(router: &Router, uri: &str, form: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
