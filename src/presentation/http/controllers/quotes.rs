// src/presentation/http/controllers/quotes.rs
use crate::application::{
    commands::quotes::{CreateQuoteCommand, DeleteQuoteCommand, UpdateQuoteCommand},
    dto::QuoteDto,
    queries::quotes::{GetQuoteByIdQuery, ListQuotesQuery, RandomQuotesQuery, SearchQuotesQuery},
};
use crate::presentation::http::controllers::ListParams;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validation;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize)]
pub struct CreateQuoteRequest {
    pub quote: Option<String>,
    pub author: Option<String>,
    pub categories: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuoteRequest {
    pub quote: Option<String>,
    pub author: Option<String>,
    pub categories: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RandomParams {
    /// Sample size, defaults to 1.
    pub limit: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/quotes",
    params(ListParams),
    responses((status = 200, description = "Page of quotes.", body = Vec<QuoteDto>)),
    tag = "Quotes"
)]
pub async fn list_quotes(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<Vec<QuoteDto>>> {
    state
        .services
        .quote_queries
        .list_quotes(ListQuotesQuery {
            limit: params.limit,
            skip: params.skip,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/quotes",
    responses(
        (status = 200, description = "The created quote.", body = QuoteDto),
        (status = 400, description = "Validation failure.")
    ),
    tag = "Quotes"
)]
pub async fn create_quote(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateQuoteRequest>,
) -> HttpResult<Json<QuoteDto>> {
    validation::create_quote(&payload)?;

    let command = CreateQuoteCommand {
        quote: payload.quote.unwrap_or_default(),
        author: payload.author.unwrap_or_default(),
        categories: payload.categories.unwrap_or_default(),
        keywords: payload.keywords.unwrap_or_default(),
    };

    state
        .services
        .quote_commands
        .create_quote(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/quotes/random",
    params(RandomParams),
    responses((status = 200, description = "Random quotes.", body = Vec<QuoteDto>)),
    tag = "Quotes"
)]
pub async fn random_quotes(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RandomParams>,
) -> HttpResult<Json<Vec<QuoteDto>>> {
    state
        .services
        .quote_queries
        .random_quotes(RandomQuotesQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/quotes/{id}",
    params(("id" = String, Path, description = "Quote id.")),
    responses(
        (status = 200, description = "The quote.", body = QuoteDto),
        (status = 404, description = "No such quote.")
    ),
    tag = "Quotes"
)]
pub async fn get_quote(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<QuoteDto>> {
    validation::path_id("quoteId", &id)?;

    state
        .services
        .quote_queries
        .get_quote_by_id(GetQuoteByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/quotes/{id}",
    params(("id" = String, Path, description = "Quote id.")),
    responses(
        (status = 200, description = "The updated quote.", body = QuoteDto),
        (status = 404, description = "No such quote.")
    ),
    tag = "Quotes"
)]
pub async fn update_quote(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateQuoteRequest>,
) -> HttpResult<Json<QuoteDto>> {
    validation::path_id("quoteId", &id)?;
    validation::update_quote(&payload)?;

    let command = UpdateQuoteCommand {
        id,
        quote: payload.quote,
        author: payload.author,
        categories: payload.categories,
        keywords: payload.keywords,
    };

    state
        .services
        .quote_commands
        .update_quote(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/quotes/{id}",
    params(("id" = String, Path, description = "Quote id.")),
    responses(
        (status = 204, description = "Quote deleted."),
        (status = 404, description = "No such quote.")
    ),
    tag = "Quotes"
)]
pub async fn delete_quote(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    validation::path_id("quoteId", &id)?;

    state
        .services
        .quote_commands
        .delete_quote(DeleteQuoteCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/quotes/search/{query}",
    params(
        ("query" = String, Path, description = "Search terms, at least 3 characters."),
        ListParams
    ),
    responses((status = 200, description = "Matching quotes.", body = Vec<QuoteDto>)),
    tag = "Quotes"
)]
pub async fn search_quotes(
    Extension(state): Extension<HttpState>,
    Path(query): Path<String>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<Vec<QuoteDto>>> {
    validation::search_query(&query)?;

    state
        .services
        .quote_queries
        .search_quotes(SearchQuotesQuery {
            query,
            limit: params.limit,
            skip: params.skip,
        })
        .await
        .into_http()
        .map(Json)
}
