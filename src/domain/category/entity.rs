// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName, CategorySlug};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn rename(&mut self, name: CategoryName, now: DateTime<Utc>) {
        self.slug = name.slug();
        self.name = name;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub created_at: DateTime<Utc>,
}

impl NewCategory {
    pub fn new(name: CategoryName, created_at: DateTime<Utc>) -> Self {
        Self {
            id: CategoryId::generate(),
            slug: name.slug(),
            name,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_category_derives_slug() {
        let new = NewCategory::new(CategoryName::new("Web Dev").unwrap(), Utc::now());
        assert_eq!(new.slug.as_str(), "web-dev");
    }

    #[test]
    fn rename_recomputes_slug() {
        let now = Utc::now();
        let new = NewCategory::new(CategoryName::new("Web Dev").unwrap(), now);
        let mut category = Category {
            id: new.id,
            name: new.name,
            slug: new.slug,
            created_at: now,
            updated_at: now,
        };
        let later = now + Duration::seconds(5);
        category.rename(CategoryName::new("Systems Programming").unwrap(), later);
        assert_eq!(category.slug.as_str(), "systems-programming");
        assert_eq!(category.updated_at, later);
    }
}
