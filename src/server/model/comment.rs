//! Comment domain models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{model::comment::CommentDto, server::model::user::UserSummary};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub author: UserSummary,
    pub content: String,
    /// Ids of the users who liked the comment.
    pub likes: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model, author: UserSummary, likes: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            author,
            content: entity.content,
            likes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            post_id: self.post_id,
            author: self.author.into_dto(),
            content: self.content,
            likes: self.likes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub author_id: i32,
    pub post_id: i32,
    pub content: String,
}
