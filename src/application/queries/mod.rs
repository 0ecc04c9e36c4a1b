// src/application/queries/mod.rs
pub mod categories;
pub mod posts;
pub mod users;
