use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct CreateCommentDto {
    #[validate(length(min = 1, message = "Comment content is required"))]
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CommentDto {
    pub id: i32,
    pub post_id: i32,
    pub author: UserSummaryDto,
    pub content: String,
    pub likes: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
