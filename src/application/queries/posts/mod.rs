// src/application/queries/posts/mod.rs
mod get;
mod list;
mod search;
mod service;

pub use get::GetPostQuery;
pub use list::ListPostsQuery;
pub use search::SearchPostsQuery;
pub use service::PostQueryService;
