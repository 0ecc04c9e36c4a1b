// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Uniquely-constrained fields. Stores report collisions through this type so
/// callers never have to inspect storage-engine error shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    PostSlug,
    CategoryName,
    Username,
    Email,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PostSlug => "A post with this title already exists",
            Self::CategoryName => "Category already exists",
            Self::Username | Self::Email => "Email or username already exists",
        })
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(UniqueField),
    #[error("{0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
