// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_category;
mod postgres_post;
mod postgres_user;

pub use error::map_sqlx;
pub use memory::{
    InMemoryCategoryRepository, InMemoryPostRepository, InMemoryStore, InMemoryUserRepository,
};
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_post::PostgresPostRepository;
pub use postgres_user::PostgresUserRepository;
