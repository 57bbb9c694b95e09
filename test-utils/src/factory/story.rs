//! Story factory for creating test story entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stories with customizable fields.
pub struct StoryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    media_public_id: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl<'a> StoryFactory<'a> {
    /// Creates a new StoryFactory for the given user.
    ///
    /// Defaults:
    /// - media: an image at `/media/stories/story_{id}`
    /// - created_at: now
    /// - expires_at: 24 hours from now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            user_id,
            media_public_id: format!("stories/story_{}", id),
            created_at: now,
            expires_at: now + Duration::hours(24),
        }
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub async fn build(self) -> Result<entity::story::Model, DbErr> {
        entity::story::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            media_url: ActiveValue::Set(format!("/media/{}", self.media_public_id)),
            media_public_id: ActiveValue::Set(self.media_public_id),
            media_resource_type: ActiveValue::Set("image".to_string()),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unexpired story for the given user.
pub async fn create_story(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::story::Model, DbErr> {
    StoryFactory::new(db, user_id).build().await
}
