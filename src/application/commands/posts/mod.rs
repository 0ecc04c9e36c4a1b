// src/application/commands/posts/mod.rs
mod comment;
mod create;
mod delete;
mod service;
mod update;

pub use comment::AddCommentCommand;
pub use create::CreatePostCommand;
pub use delete::DeletePostCommand;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
