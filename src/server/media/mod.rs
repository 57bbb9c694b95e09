//! Storage for uploaded images and videos.

pub mod local;

use async_trait::async_trait;

use crate::server::{
    error::AppError,
    model::media::{MediaDescriptor, MediaUpload},
};

pub use local::LocalMediaStore;

/// Backend that persists uploads and hands out public URLs for them.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Validates and stores an upload under `folder`.
    ///
    /// # Returns
    /// - `Ok(MediaDescriptor)` - Where the file is served from
    /// - `Err(AppError::BadRequest)` - Upload failed the size or type check
    /// - `Err(AppError::IoErr)` - Storage failure
    async fn save(&self, upload: &MediaUpload, folder: &str) -> Result<MediaDescriptor, AppError>;

    /// Removes a stored file. Unknown ids are not an error.
    async fn delete(&self, public_id: &str) -> Result<(), AppError>;
}
