//! Filesystem implementation of `MediaStore`.
//!
//! Files are content-addressed: the name is the SHA-256 of the bytes, so
//! identical uploads into the same folder share one file.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tokio::fs;

use crate::server::{
    error::AppError,
    media::MediaStore,
    model::media::{MediaDescriptor, MediaUpload},
};

pub struct LocalMediaStore {
    /// Root directory for all uploads (e.g. "./uploads").
    root_path: PathBuf,
    /// Public URL prefix the root is served under (e.g. "/media").
    url_prefix: String,
}

impl LocalMediaStore {
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root_path: root.into(),
            url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolves a public id to a path below the root, rejecting traversal.
    fn resolve(&self, public_id: &str) -> Option<PathBuf> {
        let relative = Path::new(public_id);
        let is_plain = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));

        (is_plain && !public_id.is_empty()).then(|| self.root_path.join(relative))
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn save(&self, upload: &MediaUpload, folder: &str) -> Result<MediaDescriptor, AppError> {
        let (extension, resource_type) = upload.classify()?;

        let mut hasher = Sha256::new();
        hasher.update(&upload.bytes);
        let hash = hex::encode(hasher.finalize());

        let public_id = format!("{}/{}.{}", folder, hash, extension);
        let target_path = self
            .resolve(&public_id)
            .ok_or_else(|| AppError::InternalError(format!("Invalid media folder {}", folder)))?;

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        if !fs::try_exists(&target_path).await? {
            fs::write(&target_path, &upload.bytes).await?;
        }

        tracing::debug!("Stored {} bytes as {}", upload.bytes.len(), public_id);

        Ok(MediaDescriptor {
            url: format!("{}/{}", self.url_prefix, public_id),
            public_id,
            resource_type,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), AppError> {
        let Some(path) = self.resolve(public_id) else {
            return Err(AppError::BadRequest("Invalid media id".to_string()));
        };

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
