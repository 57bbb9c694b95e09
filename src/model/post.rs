use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::{comment::CommentDto, media::MediaDto, user::UserSummaryDto};

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreatePostDto {
    #[validate(length(min = 5, message = "Content of min length 5 is required"))]
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostDto {
    pub id: i32,
    pub author: UserSummaryDto,
    pub content: String,
    pub media: Option<MediaDto>,
    /// Ids of the users who liked the post.
    pub likes: Vec<i32>,
    pub comment_count: u64,
    pub shared_from: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostDetailDto {
    #[serde(flatten)]
    pub post: PostDto,
    pub comments: Vec<CommentDto>,
}

/// Response of `GET /api/posts/user`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserPostsDto {
    pub success: bool,
    pub posts: Vec<PostDto>,
}
