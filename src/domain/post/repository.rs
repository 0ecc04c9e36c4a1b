// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::{
    entity::{CommentView, NewComment, NewPost, PostDetails, PostUpdate, PostView},
    key::PostKey,
    pagination::{Page, PageRequest, PostFilter},
    value_objects::{PostId, SearchTerm},
};
use async_trait::async_trait;

/// Persistence contract for posts and their embedded comments.
///
/// Every method is a single atomic operation against one post. Slug
/// collisions come back as `DomainError::Conflict(UniqueField::PostSlug)` and
/// references to unknown categories as `DomainError::Validation`.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Newest first, filtered by category when requested.
    async fn list(&self, filter: PostFilter, page: PageRequest) -> DomainResult<Page<PostView>>;

    async fn find(&self, key: &PostKey) -> DomainResult<Option<PostDetails>>;

    async fn insert(&self, post: NewPost) -> DomainResult<PostView>;

    /// Fails with `NotFound` when the id is unknown.
    async fn update(&self, update: PostUpdate) -> DomainResult<PostView>;

    /// Removes the post together with its comments.
    async fn delete(&self, id: PostId) -> DomainResult<()>;

    /// Appends to the post's comment list and bumps its `updated_at`.
    async fn append_comment(&self, comment: NewComment) -> DomainResult<CommentView>;

    /// Title or content contains the term, newest first.
    async fn search(&self, term: &SearchTerm) -> DomainResult<Vec<PostView>>;
}
