// src/application/commands/posts/update.rs
use super::{
    PostCommandService,
    service::{non_blank, parse_post_id},
};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
        ports::storage::ImageUpload,
    },
    domain::{
        category::CategoryId,
        ids::parse_id,
        post::{PostContent, PostSlug, PostTitle, PostUpdate},
    },
};

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Default)]
pub struct UpdatePostCommand {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    /// A blank excerpt clears it.
    pub excerpt: Option<String>,
    pub slug: Option<String>,
    pub image: Option<ImageUpload>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let id = parse_post_id(&command.id)?;
        self.load_for_mutation(actor, id, "update").await?;

        let UpdatePostCommand {
            id: _,
            title,
            content,
            category,
            excerpt,
            slug,
            image,
        } = command;

        let mut update = PostUpdate::new(id, self.clock.now());

        let title = title.map(PostTitle::new).transpose()?;
        match (non_blank(slug), &title) {
            (Some(explicit), _) => {
                update = update.with_slug(PostSlug::new(self.slugger.slugify(&explicit))?);
            }
            (None, Some(title)) => {
                update = update.with_slug(self.derive_slug(None, title)?);
            }
            (None, None) => {}
        }
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(content) = content {
            update = update.with_content(PostContent::new(content)?);
        }
        if let Some(category) = category {
            let category_id: CategoryId = parse_id(&category)?;
            update = update.with_category(category_id);
        }
        if let Some(excerpt) = excerpt {
            update = update.with_excerpt(non_blank(Some(excerpt)));
        }
        let stored_image = self.store_image(image).await?;
        if let Some(path) = stored_image.clone() {
            update = update.with_featured_image(path);
        }

        let updated = match self.repo.update(update).await {
            Ok(updated) => updated,
            Err(err) => {
                self.discard_image(stored_image.as_deref()).await;
                return Err(err.into());
            }
        };
        tracing::info!(
            post_id = %updated.post.id,
            slug = %updated.post.slug,
            actor_id = %actor.id,
            "post updated"
        );
        Ok(updated.into())
    }
}
