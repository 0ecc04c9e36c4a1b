// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
    },
    domain::category::{CategoryName, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name.unwrap_or_default())?;
        let created = self
            .repo
            .insert(NewCategory::new(name, self.clock.now()))
            .await?;

        tracing::info!(
            category_id = %created.id,
            slug = %created.slug,
            actor_id = %actor.id,
            "category created"
        );
        Ok(created.into())
    }
}
