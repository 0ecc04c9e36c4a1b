// src/domain/category/repository.rs
use crate::domain::category::{
    entity::{Category, NewCategory},
    value_objects::CategoryId,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Fails with `Conflict(CategoryName)` when the name is taken.
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;

    /// Persists a renamed category. `NotFound` when the id is unknown.
    async fn update(&self, category: &Category) -> DomainResult<Category>;

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;

    /// All categories ordered by name.
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
