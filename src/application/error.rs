// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failures surfaced by the use-case layer. The `Display` text of the client
/// facing variants is the exact message returned to callers.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// True for failures the caller cannot fix by changing the request.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Infrastructure(_) | Self::Domain(DomainError::Persistence(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::UniqueField;

    #[test]
    fn domain_conflict_keeps_its_message() {
        let err = ApplicationError::from(DomainError::Conflict(UniqueField::PostSlug));
        assert_eq!(err.to_string(), "A post with this title already exists");
        assert!(!err.is_internal());
    }

    #[test]
    fn persistence_failures_are_internal() {
        assert!(ApplicationError::from(DomainError::Persistence("boom".into())).is_internal());
        assert!(ApplicationError::infrastructure("disk full").is_internal());
        assert!(!ApplicationError::not_found("Post not found").is_internal());
    }
}
