// tests/support/helpers.rs
use super::mocks::{InMemoryAuthors, InMemoryCategories, InMemoryQuotes, InMemorySlugCounterStore};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use quotery::application::dto::HrefBuilder;
use quotery::application::services::{ApplicationDeps, ApplicationServices};
use quotery::infrastructure::{time::SystemClock, util::DefaultSlugGenerator};
use quotery::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const BASE_URL: &str = "http://localhost:3002";

/// A fully wired app over in-memory stores, plus direct handles for tests
/// that poke below the HTTP surface.
pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub counters: Arc<InMemorySlugCounterStore>,
}

pub fn make_test_app() -> TestApp {
    let authors = Arc::new(InMemoryAuthors::default());
    let categories = Arc::new(InMemoryCategories::default());
    let quotes = Arc::new(InMemoryQuotes::default());
    let counters = Arc::new(InMemorySlugCounterStore::default());

    let deps = ApplicationDeps {
        author_write_repo: authors.clone(),
        author_read_repo: authors.clone(),
        author_slug_index: authors,
        category_write_repo: categories.clone(),
        category_read_repo: categories.clone(),
        category_slug_index: categories,
        quote_write_repo: quotes.clone(),
        quote_read_repo: quotes,
        slug_counters: counters.clone(),
        clock: Arc::new(SystemClock),
        slugger: Arc::new(DefaultSlugGenerator),
        hrefs: HrefBuilder::new(BASE_URL),
    };

    let services = Arc::new(ApplicationServices::new(deps));
    let router = build_router(HttpState {
        services: Arc::clone(&services),
    });

    TestApp {
        router,
        services,
        counters,
    }
}

async fn request(
    router: &Router,
    method: Method,
    uri: &str,
    payload: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match payload {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = request(router, Method::GET, uri, None).await;
    (status, parse_json(&bytes))
}

pub async fn post_json(router: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let (status, bytes) = request(router, Method::POST, uri, Some(payload)).await;
    (status, parse_json(&bytes))
}

pub async fn put_json(router: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let (status, bytes) = request(router, Method::PUT, uri, Some(payload)).await;
    (status, parse_json(&bytes))
}

/// DELETE returns no body on success, so hand back the raw bytes.
pub async fn delete(router: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    request(router, Method::DELETE, uri, None).await
}

fn parse_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or(Value::Null)
}

/// Create an author through the API and return its response body.
pub async fn seed_author(router: &Router, name: &str) -> Value {
    let (status, body) = post_json(
        router,
        "/api/authors",
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "seeding author failed: {body}");
    body
}

/// Create a category through the API and return its response body.
pub async fn seed_category(router: &Router, name: &str) -> Value {
    let (status, body) = post_json(
        router,
        "/api/categories",
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "seeding category failed: {body}");
    body
}

pub fn field(value: &Value, key: &str) -> String {
    value[key].as_str().unwrap_or_default().to_string()
}
