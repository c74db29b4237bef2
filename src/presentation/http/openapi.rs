// src/presentation/http/openapi.rs
use crate::application::dto::{AuthorDto, CategoryDto, EntityRefDto, QuoteDto};
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::authors::list_authors,
        crate::presentation::http::controllers::authors::create_author,
        crate::presentation::http::controllers::authors::get_author,
        crate::presentation::http::controllers::authors::update_author,
        crate::presentation::http::controllers::authors::delete_author,
        crate::presentation::http::controllers::authors::search_authors,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::get_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::categories::search_categories,
        crate::presentation::http::controllers::quotes::list_quotes,
        crate::presentation::http::controllers::quotes::create_quote,
        crate::presentation::http::controllers::quotes::random_quotes,
        crate::presentation::http::controllers::quotes::get_quote,
        crate::presentation::http::controllers::quotes::update_quote,
        crate::presentation::http::controllers::quotes::delete_quote,
        crate::presentation::http::controllers::quotes::search_quotes,
        super::routes::status
    ),
    components(schemas(
        StatusResponse,
        AuthorDto,
        CategoryDto,
        QuoteDto,
        EntityRefDto,
        crate::presentation::http::error::ErrorResponse,
        crate::presentation::http::error::FieldError
    )),
    tags(
        (name = "Authors", description = "Author catalog."),
        (name = "Categories", description = "Category catalog."),
        (name = "Quotes", description = "Quote catalog with author and category references."),
        (name = "System", description = "Service endpoints.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}
