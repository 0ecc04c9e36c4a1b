// src/application/commands/mod.rs
pub mod categories;
pub mod posts;
pub mod users;
