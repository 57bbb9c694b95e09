//! Post factory for creating test post entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    content: String,
    media_url: Option<String>,
    media_public_id: Option<String>,
    media_resource_type: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory for the given author.
    ///
    /// Defaults:
    /// - content: `"Test post {id}"`
    /// - no media
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            content: format!("Test post {}", id),
            media_url: None,
            media_public_id: None,
            media_resource_type: None,
            created_at: Utc::now(),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Attaches a media descriptor to the post.
    pub fn media(
        mut self,
        url: impl Into<String>,
        public_id: impl Into<String>,
        resource_type: impl Into<String>,
    ) -> Self {
        self.media_url = Some(url.into());
        self.media_public_id = Some(public_id.into());
        self.media_resource_type = Some(resource_type.into());
        self
    }

    /// Overrides the creation timestamp, useful for ordering assertions.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            content: ActiveValue::Set(self.content),
            media_url: ActiveValue::Set(self.media_url),
            media_public_id: ActiveValue::Set(self.media_public_id),
            media_resource_type: ActiveValue::Set(self.media_resource_type),
            shared_from_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values for the given author.
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}
