// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::{
            storage::{ImageStore, ImageUpload},
            time::Clock,
            util::SlugGenerator,
        },
    },
    domain::post::{
        CanMutatePostSpec, PostId, PostKey, PostOwnershipPolicy, PostRepository, PostSlug,
        PostTitle, PostView,
    },
};

pub struct PostCommandService {
    pub(super) repo: Arc<dyn PostRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) images: Arc<dyn ImageStore>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) policy: PostOwnershipPolicy,
}

impl PostCommandService {
    pub fn new(
        repo: Arc<dyn PostRepository>,
        slugger: Arc<dyn SlugGenerator>,
        images: Arc<dyn ImageStore>,
        clock: Arc<dyn Clock>,
        policy: PostOwnershipPolicy,
    ) -> Self {
        Self {
            repo,
            slugger,
            images,
            clock,
            policy,
        }
    }

    /// An explicit, non-blank slug wins; otherwise the slug comes from the title.
    pub(super) fn derive_slug(
        &self,
        explicit: Option<&str>,
        title: &PostTitle,
    ) -> ApplicationResult<PostSlug> {
        let source = explicit
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(title.as_str());
        Ok(PostSlug::new(self.slugger.slugify(source))?)
    }

    pub(super) async fn store_image(
        &self,
        upload: Option<ImageUpload>,
    ) -> ApplicationResult<Option<String>> {
        match upload {
            Some(upload) => self.images.store(upload).await.map(Some),
            None => Ok(None),
        }
    }

    /// Removes an image stored for a write that did not go through.
    pub(super) async fn discard_image(&self, path: Option<&str>) {
        let Some(path) = path else { return };
        if let Err(err) = self.images.remove(path).await {
            tracing::warn!(path, error = %err, "failed to remove orphaned image");
        }
    }

    /// Loads a post for mutation and enforces the configured ownership policy.
    pub(super) async fn load_for_mutation(
        &self,
        actor: &AuthenticatedUser,
        id: PostId,
        action: &str,
    ) -> ApplicationResult<PostView> {
        let details = self
            .repo
            .find(&PostKey::ById(id))
            .await?
            .ok_or_else(post_not_found)?;

        let spec = CanMutatePostSpec::new(self.policy, &details.view.post, actor.id);
        if !spec.is_satisfied() {
            return Err(ApplicationError::forbidden(format!(
                "Not authorized to {action} this post"
            )));
        }

        Ok(details.view)
    }
}

pub(super) fn post_not_found() -> ApplicationError {
    ApplicationError::not_found("Post not found")
}

/// Mutations address posts by id only; anything that is not an id cannot match.
pub(super) fn parse_post_id(raw: &str) -> ApplicationResult<PostId> {
    raw.trim().parse().map_err(|_| post_not_found())
}

pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
