// src/infrastructure/repositories/error.rs
use crate::domain::errors::{DomainError, UniqueField};

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_POST_CATEGORY: &str = "posts_category_id_fkey";
const CNT_POST_AUTHOR: &str = "posts_author_id_fkey";
const CNT_COMMENT_POST: &str = "comments_post_id_fkey";
const CNT_COMMENT_USER: &str = "comments_user_id_fkey";
const CNT_CATEGORY_NAME: &str = "categories_name_key";
const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_EMAIL: &str = "users_email_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG => DomainError::Conflict(UniqueField::PostSlug),
                    CNT_CATEGORY_NAME => DomainError::Conflict(UniqueField::CategoryName),
                    CNT_USER_USERNAME => DomainError::Conflict(UniqueField::Username),
                    CNT_USER_EMAIL => DomainError::Conflict(UniqueField::Email),
                    CNT_POST_CATEGORY => DomainError::validation("Category not found"),
                    CNT_COMMENT_POST => DomainError::not_found("Post not found"),
                    CNT_POST_AUTHOR | CNT_COMMENT_USER => DomainError::not_found("User not found"),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
