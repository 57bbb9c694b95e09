use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{media::MediaDto, user::UserSummaryDto};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoryDto {
    pub id: i32,
    pub user: UserSummaryDto,
    pub media: MediaDto,
    pub views: Vec<i32>,
    pub likes: Vec<i32>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
