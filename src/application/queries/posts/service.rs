// src/application/queries/posts/service.rs
use std::sync::Arc;

use crate::domain::post::PostRepository;

pub struct PostQueryService {
    pub(super) repo: Arc<dyn PostRepository>,
}

impl PostQueryService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }
}
