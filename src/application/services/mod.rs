// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            categories::CategoryCommandService, posts::PostCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            storage::ImageStore,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            categories::CategoryQueryService, posts::PostQueryService, users::UserQueryService,
        },
    },
    domain::{
        category::CategoryRepository,
        post::{PostOwnershipPolicy, PostRepository},
        user::UserRepository,
    },
};

/// Repositories the services are built on.
pub struct Repositories {
    pub posts: Arc<dyn PostRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub users: Arc<dyn UserRepository>,
}

/// Infrastructure collaborators behind the application ports.
pub struct Ports {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub image_store: Arc<dyn ImageStore>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, ports: Ports, ownership: PostOwnershipPolicy) -> Self {
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&repos.posts),
            Arc::clone(&ports.slugger),
            Arc::clone(&ports.image_store),
            Arc::clone(&ports.clock),
            ownership,
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&repos.posts)));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&ports.clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&repos.categories)));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&ports.password_hasher),
            Arc::clone(&ports.token_manager),
            Arc::clone(&ports.clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&repos.users)));

        Self {
            post_commands,
            post_queries,
            category_commands,
            category_queries,
            user_commands,
            user_queries,
            token_manager: ports.token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Resolves a raw bearer token into the request's identity.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
