// src/application/dto/mod.rs
pub mod auth;
pub mod categories;
pub mod pagination;
pub mod posts;
pub mod serde_time;
pub mod users;

pub use auth::{AuthSessionDto, AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use categories::CategoryDto;
pub use pagination::{PagedDto, PaginationDto};
pub use posts::{AuthorDto, CategoryRefDto, CommentDto, PostDto};
pub use users::{UserDto, UserProfileDto};
