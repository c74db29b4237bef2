// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{
        CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand,
    },
    dto::CategoryDto,
    queries::categories::{GetCategoryByIdQuery, ListCategoriesQuery, SearchCategoriesQuery},
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
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    params(ListParams),
    responses((status = 200, description = "Page of categories.", body = Vec<CategoryDto>)),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories(ListCategoriesQuery {
            limit: params.limit,
            skip: params.skip,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/categories",
    responses(
        (status = 200, description = "The created category.", body = CategoryDto),
        (status = 400, description = "Validation failure.")
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    validation::create_category(&payload)?;

    let command = CreateCategoryCommand {
        name: payload.name.unwrap_or_default(),
        slug: payload.slug,
    };

    state
        .services
        .category_commands
        .create_category(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = String, Path, description = "Category id.")),
    responses(
        (status = 200, description = "The category.", body = CategoryDto),
        (status = 404, description = "No such category.")
    ),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    validation::path_id("categoryId", &id)?;

    state
        .services
        .category_queries
        .get_category_by_id(GetCategoryByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = String, Path, description = "Category id.")),
    responses(
        (status = 200, description = "The updated category.", body = CategoryDto),
        (status = 404, description = "No such category.")
    ),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    validation::path_id("categoryId", &id)?;
    validation::update_category(&payload)?;

    let command = UpdateCategoryCommand {
        id,
        name: payload.name,
        slug: payload.slug,
    };

    state
        .services
        .category_commands
        .update_category(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = String, Path, description = "Category id.")),
    responses(
        (status = 204, description = "Category deleted."),
        (status = 404, description = "No such category.")
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    validation::path_id("categoryId", &id)?;

    state
        .services
        .category_commands
        .delete_category(DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/categories/search/{query}",
    params(("query" = String, Path, description = "Name fragment, at least 3 characters.")),
    responses((status = 200, description = "Matching categories.", body = Vec<CategoryDto>)),
    tag = "Categories"
)]
pub async fn search_categories(
    Extension(state): Extension<HttpState>,
    Path(query): Path<String>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    validation::search_query(&query)?;

    state
        .services
        .category_queries
        .search_categories(SearchCategoriesQuery { query })
        .await
        .into_http()
        .map(Json)
}
