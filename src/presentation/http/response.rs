// src/presentation/http/response.rs
use crate::application::dto::{PagedDto, PaginationDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope: `{ success: true, data, count?, pagination? }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            count: None,
            pagination: None,
            data,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            count: Some(count),
            ..Self::ok(data)
        }
    }

    pub fn paged(page: PagedDto<T>) -> Self {
        Self {
            pagination: Some(page.pagination),
            ..Self::list(page.items)
        }
    }
}

/// An envelope sent with an explicit status code.
pub struct Envelope<T>(pub StatusCode, pub ApiResponse<T>);

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self(StatusCode::OK, ApiResponse::ok(data))
    }

    pub fn created(data: T) -> Self {
        Self(StatusCode::CREATED, ApiResponse::ok(data))
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

/// Empty object sent as `data` after a delete.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct Empty {}
