// tests/e2e_authors.rs
use axum::http::StatusCode;
use once_cell::sync::Lazy;
use serde_json::json;

mod support;
use support::helpers::{
    delete, field, get_json, make_test_app, post_json, put_json, seed_author,
};

static SEED_NAMES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Mark Twain",
        "Albert Einstein",
        "Arnold Palmer",
        "Arnold Schwarzenegger",
        "Paloma Picasso",
    ]
});

#[tokio::test]
async fn create_author_returns_derived_slug() {
    let app = make_test_app();

    let (status, body) = post_json(
        &app.router,
        "/api/authors",
        json!({
            "name": "Mark Twain",
            "image": "/images/mark-twain-001.jpg",
            "nationality": "American",
            "profession": "writer"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body, "name"), "Mark Twain");
    assert_eq!(field(&body, "slug"), "mark-twain");
    assert_eq!(field(&body, "nationality"), "American");
    let id = field(&body, "id");
    assert_eq!(id.len(), 24);
    assert_eq!(
        field(&body, "href"),
        format!("http://localhost:3002/api/authors/{id}")
    );
}

#[tokio::test]
async fn duplicate_name_gets_counter_suffix() {
    let app = make_test_app();

    let first = seed_author(&app.router, "Mark Twain").await;
    let second = seed_author(&app.router, "Mark Twain").await;

    assert_eq!(field(&first, "slug"), "mark-twain");
    let slug = field(&second, "slug");
    let suffix = slug
        .strip_prefix("mark-twain-")
        .expect("second slug should carry a suffix");
    assert!(suffix.parse::<u64>().expect("numeric suffix") >= 2);
    assert_ne!(field(&first, "slug"), slug);
}

#[tokio::test]
async fn supplied_slug_overrides_derived_one() {
    let app = make_test_app();

    let (status, body) = post_json(
        &app.router,
        "/api/authors",
        json!({ "name": "Mark Twain", "slug": "samuel-clemens" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body, "slug"), "samuel-clemens");
}

#[tokio::test]
async fn list_returns_seeded_authors() {
    let app = make_test_app();
    for name in SEED_NAMES.iter() {
        seed_author(&app.router, name).await;
    }

    let (status, body) = get_json(&app.router, "/api/authors").await;

    assert_eq!(status, StatusCode::OK);
    let authors = body.as_array().expect("array body");
    assert_eq!(authors.len(), SEED_NAMES.len());
    for author in authors {
        assert!(author["name"].is_string());
        assert!(author["slug"].is_string());
    }
}

#[tokio::test]
async fn list_honours_limit_and_skip() {
    let app = make_test_app();
    for name in SEED_NAMES.iter() {
        seed_author(&app.router, name).await;
    }

    let (status, body) = get_json(&app.router, "/api/authors?limit=2&skip=1").await;

    assert_eq!(status, StatusCode::OK);
    let authors = body.as_array().expect("array body");
    assert_eq!(authors.len(), 2);
    assert_eq!(field(&authors[0], "name"), "Albert Einstein");
}

#[tokio::test]
async fn get_by_id_round_trips() {
    let app = make_test_app();
    let created = seed_author(&app.router, "Mark Twain").await;
    let id = field(&created, "id");

    let (status, body) = get_json(&app.router, &format!("/api/authors/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body, "id"), id);
    assert_eq!(field(&body, "slug"), "mark-twain");
}

#[tokio::test]
async fn unknown_id_is_404_with_error_body() {
    let app = make_test_app();

    let (status, body) =
        get_json(&app.router, "/api/authors/507f1f77bcf86cd799439011").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["statusText"], "Not Found");
    assert_eq!(
        body["errors"][0]["messages"][0],
        "The resource requested does not exist"
    );
}

#[tokio::test]
async fn malformed_id_is_400_not_404() {
    let app = make_test_app();

    let (status, body) = get_json(&app.router, "/api/authors/not-a-real-id").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"][0], "authorId");
}

#[tokio::test]
async fn update_without_name_keeps_slug() {
    let app = make_test_app();
    let created = seed_author(&app.router, "Mark Twain").await;
    let id = field(&created, "id");

    let (status, body) = put_json(
        &app.router,
        &format!("/api/authors/{id}"),
        json!({ "nationality": "American" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body, "slug"), "mark-twain");
    assert_eq!(field(&body, "nationality"), "American");
}

#[tokio::test]
async fn resubmitting_same_name_keeps_slug() {
    let app = make_test_app();
    let created = seed_author(&app.router, "Mark Twain").await;
    let id = field(&created, "id");

    let (status, body) = put_json(
        &app.router,
        &format!("/api/authors/{id}"),
        json!({ "name": "Mark Twain" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body, "slug"), "mark-twain");
}

#[tokio::test]
async fn renaming_rebuilds_the_slug() {
    let app = make_test_app();
    let created = seed_author(&app.router, "Mark Twain").await;
    let id = field(&created, "id");

    let (status, body) = put_json(
        &app.router,
        &format!("/api/authors/{id}"),
        json!({ "name": "Samuel Clemens" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body, "slug"), "samuel-clemens");
}

#[tokio::test]
async fn renaming_onto_taken_name_gets_suffix() {
    let app = make_test_app();
    seed_author(&app.router, "Mark Twain").await;
    let other = seed_author(&app.router, "Albert Einstein").await;
    let id = field(&other, "id");

    let (status, body) = put_json(
        &app.router,
        &format!("/api/authors/{id}"),
        json!({ "name": "Mark Twain" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let slug = field(&body, "slug");
    assert!(slug.starts_with("mark-twain-"), "got {slug}");
}

#[tokio::test]
async fn delete_returns_204_then_404() {
    let app = make_test_app();
    let created = seed_author(&app.router, "Mark Twain").await;
    let id = field(&created, "id");

    let (status, bytes) = delete(&app.router, &format!("/api/authors/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let (status, _) = get_json(&app.router, &format!("/api/authors/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_matches_name_substring_case_insensitively() {
    let app = make_test_app();
    for name in SEED_NAMES.iter() {
        seed_author(&app.router, name).await;
    }

    let (status, body) = get_json(&app.router, "/api/authors/search/pal").await;

    assert_eq!(status, StatusCode::OK);
    let mut names: Vec<String> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|author| field(author, "name"))
        .collect();
    names.sort();
    assert_eq!(names, vec!["Arnold Palmer", "Paloma Picasso"]);
}

#[tokio::test]
async fn search_query_under_three_characters_is_400() {
    let app = make_test_app();

    let (status, body) = get_json(&app.router, "/api/authors/search/pa").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"][0], "query");
}

#[tokio::test]
async fn missing_name_is_400_with_field_error() {
    let app = make_test_app();

    let (status, body) = post_json(
        &app.router,
        "/api/authors",
        json!({ "nationality": "American" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["errors"][0]["field"][0], "name");
    assert_eq!(body["errors"][0]["location"], "body");
}
