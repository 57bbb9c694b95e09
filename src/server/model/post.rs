//! Post domain models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::post::{PostDetailDto, PostDto},
    server::model::{comment::Comment, media::MediaDescriptor, user::UserSummary},
};

/// Post with its author, like set and comment count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub author: UserSummary,
    pub content: String,
    pub media: Option<MediaDescriptor>,
    /// Ids of the users who liked the post, in like order.
    pub likes: Vec<i32>,
    pub comment_count: u64,
    /// Id of the post this one re-shares.
    pub shared_from: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Builds a post from its row and the relations loaded alongside it.
    pub fn from_entity(
        entity: entity::post::Model,
        author: UserSummary,
        likes: Vec<i32>,
        comment_count: u64,
    ) -> Self {
        Self {
            id: entity.id,
            author,
            content: entity.content,
            media: MediaDescriptor::from_columns(
                entity.media_url,
                entity.media_public_id,
                entity.media_resource_type,
            ),
            likes,
            comment_count,
            shared_from: entity.shared_from_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            author: self.author.into_dto(),
            content: self.content,
            media: self.media.map(MediaDescriptor::into_dto),
            likes: self.likes,
            comment_count: self.comment_count,
            shared_from: self.shared_from,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A post with all of its comments, cached under `post:{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub post: Post,
    /// Newest first.
    pub comments: Vec<Comment>,
}

impl PostDetail {
    pub fn into_dto(self) -> PostDetailDto {
        PostDetailDto {
            post: self.post.into_dto(),
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
        }
    }
}

/// Parameters for creating a post.
#[derive(Debug, Clone)]
pub struct CreatePostParam {
    pub author_id: i32,
    pub content: String,
    pub media: Option<MediaDescriptor>,
}
