// src/application/dto/pagination.rs
use crate::domain::post::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

/// One page of results plus the numbers needed to render a pager.
#[derive(Debug, Clone)]
pub struct PagedDto<T> {
    pub items: Vec<T>,
    pub pagination: PaginationDto,
}

impl<T> PagedDto<T> {
    pub fn from_page<U>(page: Page<U>) -> Self
    where
        T: From<U>,
    {
        let pagination = PaginationDto {
            total: page.total,
            page: page.request.page(),
            limit: page.request.limit(),
            total_pages: page.total_pages(),
        };
        Self {
            items: page.items.into_iter().map(T::from).collect(),
            pagination,
        }
    }
}
