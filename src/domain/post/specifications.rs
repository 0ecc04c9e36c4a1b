// src/domain/post/specifications.rs
use crate::domain::errors::DomainError;
use crate::domain::post::entity::Post;
use crate::domain::user::UserId;
use std::{fmt, str::FromStr};

/// Who may update or delete a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostOwnershipPolicy {
    /// Any authenticated user may mutate any post.
    #[default]
    Open,
    /// Only the post's author may mutate it.
    AuthorOnly,
}

impl PostOwnershipPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::AuthorOnly => "author_only",
        }
    }
}

impl fmt::Display for PostOwnershipPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostOwnershipPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "author_only" | "author-only" | "author" => Ok(Self::AuthorOnly),
            other => Err(DomainError::Validation(format!(
                "unknown post ownership policy '{other}'"
            ))),
        }
    }
}

pub struct CanMutatePostSpec<'a> {
    policy: PostOwnershipPolicy,
    post: &'a Post,
    user_id: UserId,
}

impl<'a> CanMutatePostSpec<'a> {
    pub fn new(policy: PostOwnershipPolicy, post: &'a Post, user_id: UserId) -> Self {
        Self {
            policy,
            post,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        match self.policy {
            PostOwnershipPolicy::Open => true,
            PostOwnershipPolicy::AuthorOnly => self.post.author_id == self.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::CategoryId;
    use crate::domain::post::value_objects::{PostContent, PostId, PostSlug, PostTitle};
    use chrono::Utc;

    fn post_by(author_id: UserId) -> Post {
        Post {
            id: PostId::generate(),
            title: PostTitle::new("t").unwrap(),
            slug: PostSlug::new("t").unwrap(),
            content: PostContent::new("c").unwrap(),
            excerpt: None,
            category_id: CategoryId::generate(),
            author_id,
            featured_image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn open_policy_allows_anyone() {
        let post = post_by(UserId::generate());
        let spec = CanMutatePostSpec::new(PostOwnershipPolicy::Open, &post, UserId::generate());
        assert!(spec.is_satisfied());
    }

    #[test]
    fn author_only_policy_checks_author() {
        let author = UserId::generate();
        let post = post_by(author);
        assert!(CanMutatePostSpec::new(PostOwnershipPolicy::AuthorOnly, &post, author).is_satisfied());
        assert!(
            !CanMutatePostSpec::new(PostOwnershipPolicy::AuthorOnly, &post, UserId::generate())
                .is_satisfied()
        );
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!("open".parse::<PostOwnershipPolicy>().unwrap(), PostOwnershipPolicy::Open);
        assert_eq!(
            "AUTHOR_ONLY".parse::<PostOwnershipPolicy>().unwrap(),
            PostOwnershipPolicy::AuthorOnly
        );
        assert!("everyone".parse::<PostOwnershipPolicy>().is_err());
    }
}
