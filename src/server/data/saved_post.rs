//! Saved (bookmarked) posts repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

pub struct SavedPostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SavedPostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a post to the user's saved set.
    ///
    /// # Returns
    /// - `Ok(true)` - Post was newly saved
    /// - `Ok(false)` - Post was already saved
    /// - `Err(DbErr)` - Database error, including a missing post or user
    pub async fn save(&self, user_id: i32, post_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::SavedPost::insert(entity::saved_post::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            post_id: ActiveValue::Set(post_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::saved_post::Column::UserId,
                entity::saved_post::Column::PostId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Removes a post from the user's saved set.
    ///
    /// # Returns
    /// - `Ok(true)` - Post was removed
    /// - `Ok(false)` - Post was not saved
    pub async fn unsave(&self, user_id: i32, post_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SavedPost::delete_many()
            .filter(entity::saved_post::Column::UserId.eq(user_id))
            .filter(entity::saved_post::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Ids of the user's saved posts, oldest save first.
    pub async fn get_post_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::SavedPost::find()
            .select_only()
            .column(entity::saved_post::Column::PostId)
            .filter(entity::saved_post::Column::UserId.eq(user_id))
            .order_by_asc(entity::saved_post::Column::CreatedAt)
            .order_by_asc(entity::saved_post::Column::PostId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Ids of the users who saved a post.
    pub async fn get_saver_ids(&self, post_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::SavedPost::find()
            .select_only()
            .column(entity::saved_post::Column::UserId)
            .filter(entity::saved_post::Column::PostId.eq(post_id))
            .order_by_asc(entity::saved_post::Column::UserId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
