// tests/e2e_errors.rs
use axum::http::StatusCode;

mod support;
use support::helpers::{get_json, make_test_app};

#[tokio::test]
async fn root_reports_service_status() {
    let app = make_test_app();

    let (status, body) = get_json(&app.router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn unknown_uri_is_404_with_invalid_uri_body() {
    let app = make_test_app();

    let (status, body) = get_json(&app.router, "/api/nowhere").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["statusText"], "Not Found");
    assert_eq!(body["errors"][0]["messages"][0], "The URI requested is invalid");
}

#[tokio::test]
async fn malformed_ids_are_rejected_before_lookup() {
    let app = make_test_app();

    for uri in [
        "/api/authors/xyz",
        "/api/categories/123",
        "/api/quotes/507f1f77bcf86cd79943901",
    ] {
        let (status, body) = get_json(&app.router, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(body["status"], 400, "uri: {uri}");
        assert_eq!(body["errors"][0]["location"], "params", "uri: {uri}");
    }
}

#[tokio::test]
async fn validation_errors_accumulate_per_field() {
    let app = make_test_app();

    let (status, body) = support::helpers::post_json(
        &app.router,
        "/api/authors",
        serde_json::json!({ "name": "M", "slug": "Bad Slug" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().expect("errors list");
    assert_eq!(errors.len(), 2);
    let fields: Vec<&str> = errors
        .iter()
        .map(|e| e["field"][0].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"slug"));
}
