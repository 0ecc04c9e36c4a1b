// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{AddCommentCommand, CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{CommentDto, PostDto},
    queries::posts::{GetPostQuery, ListPostsQuery, SearchPostsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{
    ApiJson, ApiQuery, Authenticated, PostForm, lenient_u32,
};
use crate::presentation::http::response::{ApiResponse, Empty, Envelope};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsParams {
    /// 1-based page number, defaults to 1.
    pub page: Option<String>,
    /// Page size, defaults to 10 and is capped at 100.
    pub limit: Option<String>,
    /// Category id to filter by.
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub content: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(ListPostsParams),
    responses(
        (status = 200, description = "Newest posts first", body = ApiResponse<Vec<PostDto>>),
        (status = 400, description = "Malformed category id", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ListPostsParams>,
) -> HttpResult<Json<ApiResponse<Vec<PostDto>>>> {
    let query = ListPostsQuery {
        page: lenient_u32(params.page.as_deref()),
        limit: lenient_u32(params.limit.as_deref()),
        category: params.category,
    };

    state
        .services
        .post_queries
        .list_posts(query)
        .await
        .into_http()
        .map(|page| Json(ApiResponse::paged(page)))
}

#[utoipa::path(
    get,
    path = "/api/posts/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Posts whose title or content contains the query", body = ApiResponse<Vec<PostDto>>),
        (status = 400, description = "Missing query", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn search_posts(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> HttpResult<Json<ApiResponse<Vec<PostDto>>>> {
    state
        .services
        .post_queries
        .search_posts(SearchPostsQuery { query: params.q })
        .await
        .into_http()
        .map(|posts| Json(ApiResponse::list(posts)))
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post id or slug")),
    responses(
        (status = 200, description = "Post with its comments", body = ApiResponse<PostDto>),
        (status = 404, description = "Post not found", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(key): Path<String>,
) -> HttpResult<Json<ApiResponse<PostDto>>> {
    state
        .services
        .post_queries
        .get_post(GetPostQuery { key })
        .await
        .into_http()
        .map(|post| Json(ApiResponse::ok(post)))
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body(
        content = crate::presentation::http::extractors::PostFields,
        description = "JSON body, or multipart/form-data with an optional `featuredImage` file"
    ),
    responses(
        (status = 201, description = "Post created", body = ApiResponse<PostDto>),
        (status = 400, description = "Missing fields, duplicate title or unknown category", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    form: PostForm,
) -> HttpResult<Envelope<PostDto>> {
    let PostForm { fields, image } = form;
    let command = CreatePostCommand {
        title: fields.title,
        content: fields.content,
        category: fields.category,
        excerpt: fields.excerpt,
        slug: fields.slug,
        image,
    };

    state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()
        .map(Envelope::created)
}

#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    request_body(
        content = crate::presentation::http::extractors::PostFields,
        description = "Fields to change; JSON or multipart/form-data"
    ),
    responses(
        (status = 200, description = "Post updated", body = ApiResponse<PostDto>),
        (status = 403, description = "Caller may not edit this post", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    form: PostForm,
) -> HttpResult<Json<ApiResponse<PostDto>>> {
    let PostForm { fields, image } = form;
    let command = UpdatePostCommand {
        id,
        title: fields.title,
        content: fields.content,
        category: fields.category,
        excerpt: fields.excerpt,
        slug: fields.slug,
        image,
    };

    state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(|post| Json(ApiResponse::ok(post)))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post and its comments deleted", body = ApiResponse<Empty>),
        (status = 403, description = "Caller may not delete this post", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ApiResponse<Empty>>> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(ApiResponse::ok(Empty::default())))
}

#[utoipa::path(
    post,
    path = "/api/posts/{id}/comments",
    params(("id" = String, Path, description = "Post id")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment appended", body = ApiResponse<CommentDto>),
        (status = 400, description = "Empty comment", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(post_id): Path<String>,
    ApiJson(payload): ApiJson<CommentRequest>,
) -> HttpResult<Envelope<CommentDto>> {
    let command = AddCommentCommand {
        post_id,
        content: payload.content,
    };

    state
        .services
        .post_commands
        .add_comment(&user, command)
        .await
        .into_http()
        .map(Envelope::created)
}
