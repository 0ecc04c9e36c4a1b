// src/domain/category/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::slugify_category;
use std::fmt;

pub use crate::domain::ids::CategoryId;

pub const MAX_CATEGORY_NAME_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "Please provide a category name".into(),
            ));
        }
        if value.chars().count() > MAX_CATEGORY_NAME_CHARS {
            return Err(DomainError::Validation(format!(
                "Category name cannot be more than {MAX_CATEGORY_NAME_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Categories never store a slug independently of their name.
    pub fn slug(&self) -> CategorySlug {
        CategorySlug(slugify_category(&self.0))
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategorySlug(String);

impl CategorySlug {
    /// Rehydrates a slug read back from storage.
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let name = CategoryName::new("  Rust Tips  ").unwrap();
        assert_eq!(name.as_str(), "Rust Tips");
        assert_eq!(name.slug().as_str(), "rust-tips");
    }

    #[test]
    fn name_length_is_capped_at_fifty_chars() {
        assert!(CategoryName::new("a".repeat(50)).is_ok());
        let err = CategoryName::new("a".repeat(51)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(CategoryName::new("   ").is_err());
    }
}
