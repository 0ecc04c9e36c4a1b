// src/application/commands/posts/create.rs
use super::{PostCommandService, service::non_blank};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
        ports::storage::ImageUpload,
    },
    domain::{
        category::CategoryId,
        ids::parse_id,
        post::{NewPost, PostContent, PostId, PostTitle},
    },
};

#[derive(Debug, Default)]
pub struct CreatePostCommand {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub slug: Option<String>,
    pub image: Option<ImageUpload>,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let CreatePostCommand {
            title,
            content,
            category,
            excerpt,
            slug,
            image,
        } = command;

        let (Some(title), Some(content), Some(category)) =
            (non_blank(title), non_blank(content), non_blank(category))
        else {
            return Err(ApplicationError::validation(
                "Please provide title, content and category",
            ));
        };

        let title = PostTitle::new(title)?;
        let content = PostContent::new(content)?;
        let category_id: CategoryId = parse_id(&category)?;
        let slug = self.derive_slug(slug.as_deref(), &title)?;
        let featured_image = self.store_image(image).await?;
        let stored_image = featured_image.clone();

        let new_post = NewPost {
            id: PostId::generate(),
            title,
            slug,
            content,
            excerpt: non_blank(excerpt),
            category_id,
            author_id: actor.id,
            featured_image,
            created_at: self.clock.now(),
        };

        let created = match self.repo.insert(new_post).await {
            Ok(created) => created,
            Err(err) => {
                self.discard_image(stored_image.as_deref()).await;
                return Err(err.into());
            }
        };
        tracing::info!(
            post_id = %created.post.id,
            slug = %created.post.slug,
            author_id = %actor.id,
            "post created"
        );
        Ok(created.into())
    }
}
