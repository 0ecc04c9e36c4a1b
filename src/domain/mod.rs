// src/domain/mod.rs
pub mod category;
pub mod errors;
pub mod ids;
pub mod post;
pub mod slug;
pub mod user;
