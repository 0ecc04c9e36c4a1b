// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, RenameCategoryCommand},
    dto::CategoryDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated};
use crate::presentation::http::response::{ApiResponse, Envelope};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryRequest {
    pub name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories sorted by name", body = ApiResponse<Vec<CategoryDto>>)
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ApiResponse<Vec<CategoryDto>>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(|categories| Json(ApiResponse::list(categories)))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryDto>),
        (status = 400, description = "Missing or duplicate name", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<CategoryRequest>,
) -> HttpResult<Envelope<CategoryDto>> {
    state
        .services
        .category_commands
        .create_category(&user, CreateCategoryCommand { name: payload.name })
        .await
        .into_http()
        .map(Envelope::created)
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category renamed, slug recomputed", body = ApiResponse<CategoryDto>),
        (status = 400, description = "Missing or duplicate name", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Category not found", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn rename_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<CategoryRequest>,
) -> HttpResult<Json<ApiResponse<CategoryDto>>> {
    let command = RenameCategoryCommand {
        id,
        name: payload.name,
    };

    state
        .services
        .category_commands
        .rename_category(&user, command)
        .await
        .into_http()
        .map(|category| Json(ApiResponse::ok(category)))
}
