//! Request bodies that may arrive either as `multipart/form-data` or as JSON.

use std::collections::HashMap;

use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Json,
};

use crate::server::{
    error::AppError,
    model::media::{MediaUpload, MAX_UPLOAD_BYTES},
};

/// Text fields and uploaded files of a single request body.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, MediaUpload>,
}

impl FormData {
    /// Returns a text field, if present.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns a text field or an empty string so validation can report it.
    pub fn text_or_default(&self, name: &str) -> String {
        self.text(name).unwrap_or_default().to_string()
    }

    /// Removes and returns an uploaded file.
    pub fn take_file(&mut self, name: &str) -> Option<MediaUpload> {
        self.files.remove(name)
    }

    /// Reads every part of a multipart body.
    ///
    /// Parts with a file name are collected as uploads; all other parts as text.
    ///
    /// # Returns
    /// - `Ok(FormData)` - All parts read
    /// - `Err(AppError::BadRequest)` - `"File too large"` when a file exceeds the upload limit
    /// - `Err(AppError::MultipartErr)` - Malformed multipart stream
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if field.file_name().is_some() {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await?;

                if bytes.len() > MAX_UPLOAD_BYTES {
                    return Err(AppError::BadRequest("File too large".to_string()));
                }
                // Browsers send an empty part when no file was chosen.
                if bytes.is_empty() {
                    continue;
                }

                form.files.insert(
                    name,
                    MediaUpload {
                        bytes: bytes.to_vec(),
                        content_type,
                        file_name,
                    },
                );
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Collects the scalar members of a JSON object as text fields.
    pub fn from_json(value: serde_json::Value) -> Result<Self, AppError> {
        let serde_json::Value::Object(map) = value else {
            return Err(AppError::BadRequest("Invalid request body".to_string()));
        };

        let fields = map
            .into_iter()
            .filter_map(|(key, value)| match value {
                serde_json::Value::String(s) => Some((key, s)),
                serde_json::Value::Number(n) => Some((key, n.to_string())),
                serde_json::Value::Bool(b) => Some((key, b.to_string())),
                _ => None,
            })
            .collect();

        Ok(Self {
            fields,
            files: HashMap::new(),
        })
    }
}

impl<S> FromRequest<S> for FormData
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Self::from_multipart(multipart).await
        } else {
            let Json(value) = Json::<serde_json::Value>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Self::from_json(value)
        }
    }
}
