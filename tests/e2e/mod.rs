//! Shared helpers for driving the router in-process.
//!
//! Requests go straight through the axum `Router` with `tower::ServiceExt`,
//! so no socket is bound.

use address_book::repositories::{AddressBook, ContactRepository};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use std::sync::Arc;
use tower::ServiceExt;

pub mod fixtures;

/// Status, content type and body of a finished request.
#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

#[allow(dead_code)]
impl TestResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({}): {}", e, self.body))
    }
}

/// Router backed by a fresh, empty address book.
#[allow(dead_code)]
pub fn setup_router() -> (Router, Arc<AddressBook>) {
    let store = Arc::new(AddressBook::new());
    let router = address_book::router(store.clone() as Arc<dyn ContactRepository>);
    (router, store)
}

/// Send a request with an optional `Content-Type` and body.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// Send a body-less request.
#[allow(dead_code)]
pub async fn send_empty(router: &Router, method: Method, uri: &str) -> TestResponse {
    send(router, method, uri, None, "").await
}

/// POST a JSON body to `/contact/`.
#[allow(dead_code)]
pub async fn post_contact(router: &Router, body: &str) -> TestResponse {
    send(
        router,
        Method::POST,
        "/contact/",
        Some("application/json"),
        body,
    )
    .await
}

/// Emails found in a JSON array of contacts, sorted for order-free comparison.
#[allow(dead_code)]
pub fn sorted_emails(value: &serde_json::Value) -> Vec<String> {
    let mut emails: Vec<String> = value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|c| c["email"].as_str().unwrap().to_string())
        .collect();
    emails.sort();
    emails
}
