//! Stored media descriptors and upload validation.

use serde::{Deserialize, Serialize};

use crate::{model::media::MediaDto, server::error::AppError};

/// Largest accepted upload, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Accepted MIME types with the file extension they are stored under.
const ALLOWED_TYPES: &[(&str, &str, ResourceType)] = &[
    ("image/jpeg", "jpg", ResourceType::Image),
    ("image/png", "png", ResourceType::Image),
    ("image/gif", "gif", ResourceType::Image),
    ("image/webp", "webp", ResourceType::Image),
    ("image/svg+xml", "svg", ResourceType::Image),
    ("video/mp4", "mp4", ResourceType::Video),
    ("video/mpeg", "mpeg", ResourceType::Video),
    ("video/quicktime", "mov", ResourceType::Video),
    ("video/x-msvideo", "avi", ResourceType::Video),
    ("video/x-ms-wmv", "wmv", ResourceType::Video),
    ("video/webm", "webm", ResourceType::Video),
];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Image,
    Video,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// Reads the stored column value. Anything other than `video` is an image.
    pub fn from_column(value: &str) -> Self {
        match value {
            "video" => Self::Video,
            _ => Self::Image,
        }
    }
}

/// Location of a stored file and how clients should render it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MediaDescriptor {
    /// Public URL the file is served from.
    pub url: String,
    /// Store-relative identifier used to delete the file.
    pub public_id: String,
    pub resource_type: ResourceType,
}

impl MediaDescriptor {
    /// Rebuilds a descriptor from the three nullable media columns of a row.
    ///
    /// # Returns
    /// - `Some(MediaDescriptor)` - URL and public id are both present
    /// - `None` - The row has no media attached
    pub fn from_columns(
        url: Option<String>,
        public_id: Option<String>,
        resource_type: Option<String>,
    ) -> Option<Self> {
        match (url, public_id) {
            (Some(url), Some(public_id)) => Some(Self {
                url,
                public_id,
                resource_type: resource_type
                    .as_deref()
                    .map(ResourceType::from_column)
                    .unwrap_or(ResourceType::Image),
            }),
            _ => None,
        }
    }

    pub fn into_dto(self) -> MediaDto {
        MediaDto {
            url: self.url,
            public_id: self.public_id,
            resource_type: self.resource_type.as_str().to_string(),
        }
    }
}

/// A file received in a request body, not yet stored.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub file_name: Option<String>,
}

impl MediaUpload {
    /// Checks the upload against the size limit and the MIME allow-list.
    ///
    /// Content-type parameters such as `; charset=...` are ignored.
    ///
    /// # Returns
    /// - `Ok((extension, ResourceType))` - Upload is acceptable
    /// - `Err(AppError::BadRequest)` - `"File too large"` or `"Unsupported file type"`
    pub fn classify(&self) -> Result<(&'static str, ResourceType), AppError> {
        if self.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::BadRequest("File too large".to_string()));
        }

        let mime = self
            .content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        ALLOWED_TYPES
            .iter()
            .find(|(allowed, _, _)| *allowed == mime)
            .map(|(_, ext, kind)| (*ext, *kind))
            .ok_or_else(|| AppError::BadRequest("Unsupported file type".to_string()))
    }
}
