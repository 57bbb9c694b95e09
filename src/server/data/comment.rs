//! Comment data repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::{
        group_pairs,
        user::{summary_for, UserRepository},
    },
    model::comment::{Comment, CreateCommentParam},
};

/// Repository providing database operations for comments and their likes.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a comment on a post.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error, including a missing post or author
    pub async fn create(
        &self,
        param: CreateCommentParam,
    ) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();

        entity::comment::ActiveModel {
            author_id: ActiveValue::Set(param.author_id),
            post_id: ActiveValue::Set(param.post_id),
            content: ActiveValue::Set(param.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a comment by id with its author and likes.
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - Comment found
    /// - `Ok(None)` - No comment with that id
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn find_by_id(&self, comment_id: i32) -> Result<Option<Comment>, DbErr> {
        let Some(entity) = entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.populate(vec![entity]).await?.pop())
    }

    /// Gets the comments of a post, newest first.
    pub async fn get_by_post(&self, post_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        self.populate(entities).await
    }

    /// Adds `user_id` to the comment's like set.
    ///
    /// # Returns
    /// - `Ok(true)` - Like was added
    /// - `Ok(false)` - User had already liked the comment
    pub async fn like(&self, comment_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::CommentLike::insert(entity::comment_like::ActiveModel {
            comment_id: ActiveValue::Set(comment_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::comment_like::Column::CommentId,
                entity::comment_like::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    pub async fn unlike(&self, comment_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CommentLike::delete_many()
            .filter(entity::comment_like::Column::CommentId.eq(comment_id))
            .filter(entity::comment_like::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a comment. Its likes cascade.
    pub async fn delete(&self, comment_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn populate(
        &self,
        entities: Vec<entity::comment::Model>,
    ) -> Result<Vec<Comment>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let comment_ids: Vec<i32> = entities.iter().map(|comment| comment.id).collect();

        let authors = UserRepository::new(self.db)
            .find_summaries(entities.iter().map(|comment| comment.author_id))
            .await?;

        let like_pairs = entity::prelude::CommentLike::find()
            .select_only()
            .column(entity::comment_like::Column::CommentId)
            .column(entity::comment_like::Column::UserId)
            .filter(entity::comment_like::Column::CommentId.is_in(comment_ids))
            .order_by_asc(entity::comment_like::Column::CreatedAt)
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await?;
        let mut likes = group_pairs(like_pairs);

        entities
            .into_iter()
            .map(|entity| {
                let author = summary_for(&authors, entity.author_id)?;
                let comment_likes = likes.remove(&entity.id).unwrap_or_default();

                Ok(Comment::from_entity(entity, author, comment_likes))
            })
            .collect()
    }
}
