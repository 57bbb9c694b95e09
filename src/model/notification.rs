use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{media::MediaDto, user::UserSummaryDto};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NotificationDto {
    pub id: i32,
    pub user_id: i32,
    pub from: UserSummaryDto,
    /// One of `like`, `comment`, `follow`, `message`, `mention`.
    #[serde(rename = "type")]
    pub kind: String,
    pub post: Option<NotificationPostDto>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NotificationPostDto {
    pub id: i32,
    pub content: String,
    pub media: Option<MediaDto>,
}
