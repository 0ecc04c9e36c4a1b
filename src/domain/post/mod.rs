// src/domain/post/mod.rs
pub mod entity;
pub mod key;
pub mod pagination;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{
    AuthorRef, CategoryRef, Comment, CommentView, NewComment, NewPost, Post, PostDetails,
    PostUpdate, PostView,
};
pub use key::PostKey;
pub use pagination::{Page, PageRequest, PostFilter};
pub use repository::PostRepository;
pub use specifications::{CanMutatePostSpec, PostOwnershipPolicy};
pub use value_objects::{
    CommentContent, CommentId, PostContent, PostId, PostSlug, PostTitle, SearchTerm,
};
