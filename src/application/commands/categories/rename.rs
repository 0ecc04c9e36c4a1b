// src/application/commands/categories/rename.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryName},
};

pub struct RenameCategoryCommand {
    pub id: String,
    pub name: Option<String>,
}

impl CategoryCommandService {
    pub async fn rename_category(
        &self,
        actor: &AuthenticatedUser,
        command: RenameCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let not_found = || ApplicationError::not_found("Category not found");
        let id: CategoryId = command.id.trim().parse().map_err(|_| not_found())?;
        let name = CategoryName::new(command.name.unwrap_or_default())?;

        let mut category = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        if category.name == name {
            return Ok(category.into());
        }

        category.rename(name, self.clock.now());
        let updated = self.repo.update(&category).await?;

        tracing::info!(
            category_id = %updated.id,
            slug = %updated.slug,
            actor_id = %actor.id,
            "category renamed"
        );
        Ok(updated.into())
    }
}
