// src/domain/post/entity.rs
use crate::domain::category::{CategoryId, CategoryName};
use crate::domain::post::value_objects::{
    CommentContent, CommentId, PostContent, PostId, PostSlug, PostTitle,
};
use crate::domain::user::{UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub excerpt: Option<String>,
    pub category_id: CategoryId,
    pub author_id: UserId,
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Applies a partial update in place. Each supplied field was validated
    /// when the update was built, so the merged post stays valid.
    pub fn apply(&mut self, update: &PostUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(slug) = &update.slug {
            self.slug = slug.clone();
        }
        if let Some(content) = &update.content {
            self.content = content.clone();
        }
        if let Some(excerpt) = &update.excerpt {
            self.excerpt = excerpt.clone();
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        if let Some(image) = &update.featured_image {
            self.featured_image = Some(image.clone());
        }
        self.updated_at = update.updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub excerpt: Option<String>,
    pub category_id: CategoryId,
    pub author_id: UserId,
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<PostSlug>,
    pub content: Option<PostContent>,
    /// `Some(None)` clears the excerpt.
    pub excerpt: Option<Option<String>>,
    pub category_id: Option<CategoryId>,
    pub featured_image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            excerpt: None,
            category_id: None,
            featured_image: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_excerpt(mut self, excerpt: Option<String>) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_featured_image(mut self, path: String) -> Self {
        self.featured_image = Some(path);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRef {
    pub id: UserId,
    pub username: Username,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: CategoryName,
}

/// A post with its author and category names resolved.
#[derive(Debug, Clone)]
pub struct PostView {
    pub post: Post,
    pub author: AuthorRef,
    pub category: CategoryRef,
}

#[derive(Debug, Clone)]
pub struct CommentView {
    pub comment: Comment,
    pub user: AuthorRef,
}

/// Single-post read model, comments in the order they were appended.
#[derive(Debug, Clone)]
pub struct PostDetails {
    pub view: PostView,
    pub comments: Vec<CommentView>,
}
