// src/application/commands/posts/comment.rs
use super::{PostCommandService, service::parse_post_id};
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::ApplicationResult,
    },
    domain::post::{CommentContent, CommentId, NewComment},
};

pub struct AddCommentCommand {
    pub post_id: String,
    pub content: Option<String>,
}

impl PostCommandService {
    /// Comments are open to every authenticated user regardless of the
    /// ownership policy.
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let post_id = parse_post_id(&command.post_id)?;
        let content = CommentContent::new(command.content.unwrap_or_default())?;

        let comment = NewComment {
            id: CommentId::generate(),
            post_id,
            user_id: actor.id,
            content,
            created_at: self.clock.now(),
        };

        let appended = self.repo.append_comment(comment).await?;
        tracing::info!(
            post_id = %post_id,
            comment_id = %appended.comment.id,
            user_id = %actor.id,
            "comment added"
        );
        Ok(appended.into())
    }
}
