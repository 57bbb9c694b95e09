//! Follow graph repository.
//!
//! Edges are directed: `follower_id` follows `following_id`. The composite
//! primary key makes inserting an existing edge a no-op.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

pub struct FollowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds the edge `follower_id → following_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Edge was created
    /// - `Ok(false)` - Edge already existed
    /// - `Err(DbErr)` - Database error, including a missing user
    pub async fn follow(&self, follower_id: i32, following_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::Follow::insert(entity::follow::ActiveModel {
            follower_id: ActiveValue::Set(follower_id),
            following_id: ActiveValue::Set(following_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::follow::Column::FollowerId,
                entity::follow::Column::FollowingId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Removes the edge `follower_id → following_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Edge was removed
    /// - `Ok(false)` - There was no such edge
    /// - `Err(DbErr)` - Database error during delete
    pub async fn unfollow(&self, follower_id: i32, following_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Follow::delete_many()
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FollowingId.eq(following_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn is_following(&self, follower_id: i32, following_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FollowingId.eq(following_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Number of users following `user_id`.
    pub async fn follower_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowingId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Number of users `user_id` follows.
    pub async fn following_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(user_id))
            .count(self.db)
            .await
    }
}
