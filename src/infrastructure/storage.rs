// src/infrastructure/storage.rs
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::{ImageStore, ImageUpload},
};

/// URL prefix the upload directory is served under.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Writes uploaded images into a local directory under random names.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the upload directory when it does not exist yet.
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }
}

/// Maps an accepted image content type to the extension it is stored with.
/// The client's file name never influences the stored name.
fn image_extension(content_type: &str) -> Option<&'static str> {
    let parsed = content_type.parse::<mime::Mime>().ok()?;
    if parsed.type_() != mime::IMAGE {
        return None;
    }
    match parsed.subtype().as_str() {
        "jpeg" => Some("jpeg"),
        "png" => Some("png"),
        "gif" => Some("gif"),
        "webp" => Some("webp"),
        _ => None,
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store(&self, upload: ImageUpload) -> ApplicationResult<String> {
        let Some(ext) = image_extension(&upload.content_type) else {
            tracing::debug!(
                content_type = %upload.content_type,
                client_name = ?upload.file_name,
                "rejected upload"
            );
            return Err(ApplicationError::validation("Only image files are allowed"));
        };

        let file_name = format!("{}.{ext}", Uuid::new_v4());
        tokio::fs::write(self.root.join(&file_name), &upload.data)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("image write failed: {err}")))?;

        tracing::debug!(file = %file_name, bytes = upload.data.len(), "stored uploaded image");
        Ok(format!("{UPLOADS_ROUTE}/{file_name}"))
    }

    async fn remove(&self, path: &str) -> ApplicationResult<()> {
        let file_name = path
            .strip_prefix(UPLOADS_ROUTE)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|name| {
                !name.is_empty() && !name.contains(['/', '\\']) && !name.starts_with('.')
            })
            .ok_or_else(|| ApplicationError::validation(format!("not an upload path: {path}")))?;

        match tokio::fs::remove_file(self.root.join(file_name)).await {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(ApplicationError::infrastructure(format!(
                    "image removal failed: {err}"
                )));
            }
        }
        tracing::debug!(file = %file_name, "removed uploaded image");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn upload(content_type: &str, file_name: Option<&str>) -> ImageUpload {
        ImageUpload {
            file_name: file_name.map(str::to_owned),
            content_type: content_type.into(),
            data: Bytes::from_static(b"\x89PNG fake"),
        }
    }

    #[tokio::test]
    async fn stores_image_under_uploads_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());

        let path = store
            .store(upload("image/png", Some("Cover Photo.bin")))
            .await
            .unwrap();

        assert!(path.starts_with("/uploads/"));
        assert!(path.ends_with(".png"));
        let file_name = path.trim_start_matches("/uploads/");
        assert!(dir.path().join(file_name).exists());
    }

    #[tokio::test]
    async fn rejects_non_images() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());

        let err = store
            .store(upload("application/pdf", Some("doc.pdf")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(msg) if msg == "Only image files are allowed"));
    }

    #[tokio::test]
    async fn rejects_unlisted_image_types_whatever_the_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());

        for (content_type, name) in [
            ("image/x-evil", "evil.html"),
            ("image/svg+xml", "vector.svg"),
            ("image/bmp", "scan.bmp"),
        ] {
            let err = store.store(upload(content_type, Some(name))).await.unwrap_err();
            assert!(
                matches!(err, ApplicationError::Validation(ref msg) if msg == "Only image files are allowed"),
                "{content_type}"
            );
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn extension_comes_from_content_type_only() {
        assert_eq!(image_extension("image/png"), Some("png"));
        assert_eq!(image_extension("image/jpeg"), Some("jpeg"));
        assert_eq!(image_extension("IMAGE/GIF"), Some("gif"));
        assert_eq!(image_extension("image/webp"), Some("webp"));
        assert_eq!(image_extension("image/pjpeg"), None);
        assert_eq!(image_extension("text/html"), None);
        assert_eq!(image_extension("not a type"), None);
    }

    #[tokio::test]
    async fn remove_deletes_stored_file_and_ignores_missing_ones() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());
        let path = store.store(upload("image/gif", None)).await.unwrap();

        store.remove(&path).await.unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        store.remove(&path).await.unwrap();
    }

    #[tokio::test]
    async fn remove_refuses_paths_outside_the_upload_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());

        for path in ["/uploads/../secret", "/uploads/", "/static/a.png", "/uploads/a/b.png"] {
            assert!(store.remove(path).await.is_err(), "{path}");
        }
    }
}
