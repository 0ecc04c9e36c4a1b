// src/application/commands/posts/delete.rs
use super::{PostCommandService, service::parse_post_id};
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeletePostCommand {
    pub id: String,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let id = parse_post_id(&command.id)?;
        self.load_for_mutation(actor, id, "delete").await?;

        self.repo.delete(id).await?;
        tracing::info!(post_id = %id, actor_id = %actor.id, "post deleted");
        Ok(())
    }
}
