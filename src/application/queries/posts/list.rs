// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::{PagedDto, PostDto},
        error::ApplicationResult,
    },
    domain::{
        category::CategoryId,
        ids::parse_id,
        post::{PageRequest, PostFilter},
    },
};

#[derive(Debug, Default)]
pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
}

impl PostQueryService {
    /// Pages past the end come back empty rather than failing.
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<PagedDto<PostDto>> {
        let category = query
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(parse_id::<CategoryId>)
            .transpose()?;

        let page = self
            .repo
            .list(PostFilter { category }, PageRequest::new(query.page, query.limit))
            .await?;

        Ok(PagedDto::from_page(page))
    }
}
