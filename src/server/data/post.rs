//! Post data repository.
//!
//! Reads return fully populated [`Post`]s: the author summary, the like set and
//! the comment count are batch loaded for all rows of a query at once.

use std::collections::HashMap;

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::{
        group_pairs,
        user::{summary_for, UserRepository},
    },
    model::post::{CreatePostParam, Post},
};

/// Repository providing database operations for posts and their likes.
pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    /// Creates a new PostRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PostRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new post.
    ///
    /// # Arguments
    /// - `param` - Author, content and optional stored media
    ///
    /// # Returns
    /// - `Ok(entity::post::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePostParam) -> Result<entity::post::Model, DbErr> {
        let now = Utc::now();
        let (media_url, media_public_id, media_resource_type) = match param.media {
            Some(media) => (
                Some(media.url),
                Some(media.public_id),
                Some(media.resource_type.as_str().to_string()),
            ),
            None => (None, None, None),
        };

        entity::post::ActiveModel {
            author_id: ActiveValue::Set(param.author_id),
            content: ActiveValue::Set(param.content),
            media_url: ActiveValue::Set(media_url),
            media_public_id: ActiveValue::Set(media_public_id),
            media_resource_type: ActiveValue::Set(media_resource_type),
            shared_from_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a post by id with its relations.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - Post found
    /// - `Ok(None)` - No post with that id
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn find_by_id(&self, post_id: i32) -> Result<Option<Post>, DbErr> {
        let Some(entity) = entity::prelude::Post::find_by_id(post_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.populate(vec![entity]).await?.pop())
    }

    pub async fn exists(&self, post_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Post::find_by_id(post_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every post, newest first.
    pub async fn get_all(&self) -> Result<Vec<Post>, DbErr> {
        let entities = entity::prelude::Post::find()
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        self.populate(entities).await
    }

    /// Gets the posts written by one user, newest first.
    pub async fn get_by_author(&self, author_id: i32) -> Result<Vec<Post>, DbErr> {
        let entities = entity::prelude::Post::find()
            .filter(entity::post::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        self.populate(entities).await
    }

    /// Adds `user_id` to the post's like set.
    ///
    /// # Returns
    /// - `Ok(true)` - Like was added
    /// - `Ok(false)` - User had already liked the post
    /// - `Err(DbErr)` - Database error, including a missing post
    pub async fn like(&self, post_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::PostLike::insert(entity::post_like::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::post_like::Column::PostId,
                entity::post_like::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Removes `user_id` from the post's like set.
    ///
    /// # Returns
    /// - `Ok(true)` - Like was removed
    /// - `Ok(false)` - User had not liked the post
    pub async fn unlike(&self, post_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PostLike::delete_many()
            .filter(entity::post_like::Column::PostId.eq(post_id))
            .filter(entity::post_like::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a post. Comments, likes and notifications cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Post was deleted
    /// - `Ok(false)` - No post with that id
    pub async fn delete(&self, post_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::delete_by_id(post_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether any post still points at a stored media file.
    pub async fn media_in_use(&self, public_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Post::find()
            .filter(entity::post::Column::MediaPublicId.eq(public_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Loads authors, likes and comment counts for a batch of post rows.
    ///
    /// Preserves the order of `entities`.
    async fn populate(&self, entities: Vec<entity::post::Model>) -> Result<Vec<Post>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<i32> = entities.iter().map(|post| post.id).collect();

        let authors = UserRepository::new(self.db)
            .find_summaries(entities.iter().map(|post| post.author_id))
            .await?;

        let like_pairs = entity::prelude::PostLike::find()
            .select_only()
            .column(entity::post_like::Column::PostId)
            .column(entity::post_like::Column::UserId)
            .filter(entity::post_like::Column::PostId.is_in(post_ids.clone()))
            .order_by_asc(entity::post_like::Column::CreatedAt)
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await?;
        let mut likes = group_pairs(like_pairs);

        let comment_counts: HashMap<i32, i64> = entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::PostId)
            .column_as(entity::comment::Column::Id.count(), "count")
            .filter(entity::comment::Column::PostId.is_in(post_ids))
            .group_by(entity::comment::Column::PostId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        entities
            .into_iter()
            .map(|entity| {
                let author = summary_for(&authors, entity.author_id)?;
                let post_likes = likes.remove(&entity.id).unwrap_or_default();
                let comment_count = comment_counts.get(&entity.id).copied().unwrap_or(0) as u64;

                Ok(Post::from_entity(entity, author, post_likes, comment_count))
            })
            .collect()
    }
}
