// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// An uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: String,
    pub data: Bytes,
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persists the image and returns the public path it is served under.
    async fn store(&self, upload: ImageUpload) -> ApplicationResult<String>;

    /// Deletes an image previously returned by [`ImageStore::store`].
    async fn remove(&self, path: &str) -> ApplicationResult<()>;
}
