//! Upload and release of stored media files.
//!
//! Files are content addressed, so the same upload attached to two posts or
//! stories shares one stored file. A file is only removed from the store once
//! no row refers to it anymore.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{post::PostRepository, story::StoryRepository},
    error::AppError,
    media::MediaStore,
    model::media::{MediaDescriptor, MediaUpload},
};

pub struct MediaService<'a> {
    db: &'a DatabaseConnection,
    store: &'a dyn MediaStore,
}

impl<'a> MediaService<'a> {
    pub fn new(db: &'a DatabaseConnection, store: &'a dyn MediaStore) -> Self {
        Self { db, store }
    }

    /// Validates and stores an upload under `folder`.
    ///
    /// # Returns
    /// - `Ok(MediaDescriptor)` - Where the file can be fetched
    /// - `Err(AppError::BadRequest)` - Unsupported type or too large
    pub async fn upload(
        &self,
        upload: &MediaUpload,
        folder: &str,
    ) -> Result<MediaDescriptor, AppError> {
        self.store.save(upload, folder).await
    }

    /// Deletes a stored file if no post or story refers to it anymore.
    ///
    /// Called after the owning row has been deleted. Failures are logged, the
    /// row deletion that triggered the release has already succeeded.
    pub async fn release(&self, media: &MediaDescriptor) {
        match self.in_use(&media.public_id).await {
            Ok(true) => {
                tracing::debug!("Keeping shared media {}", media.public_id);
            }
            Ok(false) => {
                if let Err(e) = self.store.delete(&media.public_id).await {
                    tracing::warn!("Failed to delete media {}: {}", media.public_id, e);
                }
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to check references to media {}: {}",
                    media.public_id,
                    e
                );
            }
        }
    }

    async fn in_use(&self, public_id: &str) -> Result<bool, AppError> {
        Ok(PostRepository::new(self.db).media_in_use(public_id).await?
            || StoryRepository::new(self.db).media_in_use(public_id).await?)
    }
}
