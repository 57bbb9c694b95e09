//! Notification domain models and parameters.

use chrono::{DateTime, Utc};
use entity::notification::NotificationKind;

use crate::{
    model::notification::{NotificationDto, NotificationPostDto},
    server::model::{media::MediaDescriptor, user::UserSummary},
};

/// Notification populated with its actor and the post it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    /// Recipient.
    pub user_id: i32,
    /// User whose action produced the notification.
    pub from: UserSummary,
    pub kind: NotificationKind,
    pub post: Option<NotificationPost>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            user_id: self.user_id,
            from: self.from.into_dto(),
            kind: kind_name(self.kind).to_string(),
            post: self.post.map(NotificationPost::into_dto),
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

/// The slice of a post shown next to a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPost {
    pub id: i32,
    pub content: String,
    pub media: Option<MediaDescriptor>,
}

impl NotificationPost {
    pub fn from_entity(entity: entity::post::Model) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            media: MediaDescriptor::from_columns(
                entity.media_url,
                entity.media_public_id,
                entity.media_resource_type,
            ),
        }
    }

    pub fn into_dto(self) -> NotificationPostDto {
        NotificationPostDto {
            id: self.id,
            content: self.content,
            media: self.media.map(MediaDescriptor::into_dto),
        }
    }
}

/// Parameters for creating a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateNotificationParam {
    /// Recipient.
    pub user_id: i32,
    /// Actor.
    pub from_id: i32,
    pub kind: NotificationKind,
    pub post_id: Option<i32>,
}

/// Wire name of a notification kind.
pub fn kind_name(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Like => "like",
        NotificationKind::Comment => "comment",
        NotificationKind::Follow => "follow",
        NotificationKind::Message => "message",
        NotificationKind::Mention => "mention",
    }
}
