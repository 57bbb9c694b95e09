//! Story domain models and parameters.
//!
//! Stories are short-lived media posts. They expire 24 hours after creation and
//! are filtered out of every read from then on.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::story::StoryDto,
    server::model::{
        media::{MediaDescriptor, ResourceType},
        user::UserSummary,
    },
};

/// How long a story stays visible.
pub const STORY_LIFETIME_HOURS: i64 = 24;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Story {
    pub id: i32,
    pub user: UserSummary,
    pub media: MediaDescriptor,
    /// Ids of the users who viewed the story.
    pub views: Vec<i32>,
    /// Ids of the users who liked the story.
    pub likes: Vec<i32>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Story {
    pub fn from_entity(
        entity: entity::story::Model,
        user: UserSummary,
        views: Vec<i32>,
        likes: Vec<i32>,
    ) -> Self {
        Self {
            id: entity.id,
            user,
            media: MediaDescriptor {
                url: entity.media_url,
                public_id: entity.media_public_id,
                resource_type: ResourceType::from_column(&entity.media_resource_type),
            },
            views,
            likes,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> StoryDto {
        StoryDto {
            id: self.id,
            user: self.user.into_dto(),
            media: self.media.into_dto(),
            views: self.views,
            likes: self.likes,
            expires_at: self.expires_at,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStoryParam {
    pub user_id: i32,
    pub media: MediaDescriptor,
    pub expires_at: DateTime<Utc>,
}

impl CreateStoryParam {
    /// Parameters for a story expiring [`STORY_LIFETIME_HOURS`] from `now`.
    pub fn expiring_from(user_id: i32, media: MediaDescriptor, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            media,
            expires_at: now + Duration::hours(STORY_LIFETIME_HOURS),
        }
    }
}
