// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{authors, categories, quotes},
    error::HttpError,
    openapi::{self, StatusResponse},
};
use axum::{Extension, Router, http::Method, routing::get};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/", get(status))
        .route(
            "/api/authors",
            get(authors::list_authors).post(authors::create_author),
        )
        .route(
            "/api/authors/{id}",
            get(authors::get_author)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        .route("/api/authors/search/{query}", get(authors::search_authors))
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/categories/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/api/categories/search/{query}",
            get(categories::search_categories),
        )
        .route(
            "/api/quotes",
            get(quotes::list_quotes).post(quotes::create_quote),
        )
        .route("/api/quotes/random", get(quotes::random_quotes))
        .route(
            "/api/quotes/{id}",
            get(quotes::get_quote)
                .put(quotes::update_quote)
                .delete(quotes::delete_quote),
        )
        .route("/api/quotes/search/{query}", get(quotes::search_quotes))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service status check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn status() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "OK".into(),
    })
}

async fn not_found() -> HttpError {
    HttpError::invalid_uri()
}
