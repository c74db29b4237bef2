// src/presentation/http/controllers/authors.rs
use crate::application::{
    commands::authors::{CreateAuthorCommand, DeleteAuthorCommand, UpdateAuthorCommand},
    dto::AuthorDto,
    queries::authors::{GetAuthorByIdQuery, ListAuthorsQuery, SearchAuthorsQuery},
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

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub image: Option<String>,
    pub nationality: Option<String>,
    pub profession: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub image: Option<String>,
    pub nationality: Option<String>,
    pub profession: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/authors",
    params(ListParams),
    responses((status = 200, description = "Page of authors.", body = Vec<AuthorDto>)),
    tag = "Authors"
)]
pub async fn list_authors(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<Vec<AuthorDto>>> {
    state
        .services
        .author_queries
        .list_authors(ListAuthorsQuery {
            limit: params.limit,
            skip: params.skip,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/authors",
    responses(
        (status = 200, description = "The created author.", body = AuthorDto),
        (status = 400, description = "Validation failure.")
    ),
    tag = "Authors"
)]
pub async fn create_author(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateAuthorRequest>,
) -> HttpResult<Json<AuthorDto>> {
    validation::create_author(&payload)?;

    let command = CreateAuthorCommand {
        name: payload.name.unwrap_or_default(),
        slug: payload.slug,
        image: payload.image,
        nationality: payload.nationality,
        profession: payload.profession,
    };

    state
        .services
        .author_commands
        .create_author(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/authors/{id}",
    params(("id" = String, Path, description = "Author id.")),
    responses(
        (status = 200, description = "The author.", body = AuthorDto),
        (status = 404, description = "No such author.")
    ),
    tag = "Authors"
)]
pub async fn get_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<AuthorDto>> {
    validation::path_id("authorId", &id)?;

    state
        .services
        .author_queries
        .get_author_by_id(GetAuthorByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/authors/{id}",
    params(("id" = String, Path, description = "Author id.")),
    responses(
        (status = 200, description = "The updated author.", body = AuthorDto),
        (status = 404, description = "No such author.")
    ),
    tag = "Authors"
)]
pub async fn update_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAuthorRequest>,
) -> HttpResult<Json<AuthorDto>> {
    validation::path_id("authorId", &id)?;
    validation::update_author(&payload)?;

    let command = UpdateAuthorCommand {
        id,
        name: payload.name,
        slug: payload.slug,
        image: payload.image,
        nationality: payload.nationality,
        profession: payload.profession,
    };

    state
        .services
        .author_commands
        .update_author(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/authors/{id}",
    params(("id" = String, Path, description = "Author id.")),
    responses(
        (status = 204, description = "Author deleted."),
        (status = 404, description = "No such author.")
    ),
    tag = "Authors"
)]
pub async fn delete_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    validation::path_id("authorId", &id)?;

    state
        .services
        .author_commands
        .delete_author(DeleteAuthorCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/authors/search/{query}",
    params(("query" = String, Path, description = "Name fragment, at least 3 characters.")),
    responses((status = 200, description = "Matching authors.", body = Vec<AuthorDto>)),
    tag = "Authors"
)]
pub async fn search_authors(
    Extension(state): Extension<HttpState>,
    Path(query): Path<String>,
) -> HttpResult<Json<Vec<AuthorDto>>> {
    validation::search_query(&query)?;

    state
        .services
        .author_queries
        .search_authors(SearchAuthorsQuery { query })
        .await
        .into_http()
        .map(Json)
}
