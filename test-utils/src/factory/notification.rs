//! Notification factory for creating test notification entities.

use chrono::{DateTime, Utc};
use entity::notification::NotificationKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications with customizable fields.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    from_id: i32,
    kind: NotificationKind,
    post_id: Option<i32>,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new unread `follow` notification from `from_id` to `user_id`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, from_id: i32) -> Self {
        Self {
            db,
            user_id,
            from_id,
            kind: NotificationKind::Follow,
            post_id: None,
            is_read: false,
            created_at: Utc::now(),
        }
    }

    pub fn kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn post(mut self, post_id: i32) -> Self {
        self.post_id = Some(post_id);
        self
    }

    pub fn read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            from_id: ActiveValue::Set(self.from_id),
            kind: ActiveValue::Set(self.kind),
            post_id: ActiveValue::Set(self.post_id),
            is_read: ActiveValue::Set(self.is_read),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread `follow` notification.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
    from_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id, from_id).build().await
}
