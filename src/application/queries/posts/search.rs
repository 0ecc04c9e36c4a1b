// src/application/queries/posts/search.rs
use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::SearchTerm,
};

pub struct SearchPostsQuery {
    pub query: Option<String>,
}

impl PostQueryService {
    pub async fn search_posts(&self, query: SearchPostsQuery) -> ApplicationResult<Vec<PostDto>> {
        let term = SearchTerm::new(query.query.unwrap_or_default())?;
        let posts = self.repo.search(&term).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
