// src/application/queries/posts/get.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostKey,
};

pub struct GetPostQuery {
    /// Either a post id or a slug.
    pub key: String,
}

impl PostQueryService {
    pub async fn get_post(&self, query: GetPostQuery) -> ApplicationResult<PostDto> {
        let not_found = || ApplicationError::not_found("Post not found");
        let key = PostKey::parse(&query.key).map_err(|_| not_found())?;

        let details = self.repo.find(&key).await?.ok_or_else(not_found)?;
        Ok(details.into())
    }
}
