// src/domain/post/key.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::value_objects::{PostId, PostSlug};
use std::fmt;
use uuid::Uuid;

/// How a post is addressed by a public URL segment.
///
/// Resolved once from the raw segment: anything that parses as a UUID is an
/// id, everything else is a slug. A string that looks like neither simply
/// misses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostKey {
    ById(PostId),
    BySlug(PostSlug),
}

impl PostKey {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        match Uuid::parse_str(raw) {
            Ok(uuid) => Ok(Self::ById(PostId::from(uuid))),
            Err(_) => PostSlug::new(raw).map(Self::BySlug),
        }
    }
}

impl fmt::Display for PostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ById(id) => write!(f, "id {id}"),
            Self::BySlug(slug) => write!(f, "slug {slug}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_ids() {
        let id = PostId::generate();
        assert_eq!(PostKey::parse(&id.to_string()).unwrap(), PostKey::ById(id));
    }

    #[test]
    fn other_segments_are_slugs() {
        let key = PostKey::parse("hello-world").unwrap();
        assert_eq!(key, PostKey::BySlug(PostSlug::new("hello-world").unwrap()));
    }

    #[test]
    fn malformed_uuid_is_treated_as_slug() {
        let key = PostKey::parse("6f1c2b7e-0000-zzzz-0000-000000000000").unwrap();
        assert!(matches!(key, PostKey::BySlug(_)));
    }

    #[test]
    fn empty_segment_is_rejected() {
        assert!(PostKey::parse("  ").is_err());
    }
}
