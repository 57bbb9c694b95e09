//! Notification data repository.
//!
//! Notifications are returned populated with the actor's summary and, when one
//! is attached, the content and media of the post they refer to.

use std::collections::HashMap;

use chrono::Utc;
use entity::notification::NotificationKind;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::user::{summary_for, UserRepository},
    model::notification::{CreateNotificationParam, Notification, NotificationPost},
};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an unread notification.
    ///
    /// # Returns
    /// - `Ok(entity::notification::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error, including a missing user or post
    pub async fn create(
        &self,
        param: CreateNotificationParam,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            from_id: ActiveValue::Set(param.from_id),
            kind: ActiveValue::Set(param.kind),
            post_id: ActiveValue::Set(param.post_id),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a notification by id, populated.
    pub async fn find_by_id(&self, notification_id: i32) -> Result<Option<Notification>, DbErr> {
        let Some(entity) = entity::prelude::Notification::find_by_id(notification_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.populate(vec![entity]).await?.pop())
    }

    /// Gets the newest notifications of a user.
    ///
    /// # Arguments
    /// - `user_id` - Recipient
    /// - `limit` - Maximum number of notifications returned
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)` - Newest first
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn get_recent_for_user(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.populate(entities).await
    }

    /// Marks one notification as read if it belongs to `user_id`.
    ///
    /// # Returns
    /// - `Ok(1)` - Notification updated
    /// - `Ok(0)` - No such notification for this user
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_read(&self, notification_id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::Id.eq(notification_id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks every unread notification of a user as read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications that changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the notifications an actor produced for a recipient.
    ///
    /// # Arguments
    /// - `user_id` - Recipient
    /// - `from_id` - Actor
    /// - `kind` - Notification kind
    /// - `post_id` - Post the notification refers to, `None` for post-less kinds
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Ids of the deleted notifications
    /// - `Err(DbErr)` - Database error during select or delete
    pub async fn delete_matching(
        &self,
        user_id: i32,
        from_id: i32,
        kind: NotificationKind,
        post_id: Option<i32>,
    ) -> Result<Vec<i32>, DbErr> {
        let mut query = entity::prelude::Notification::find()
            .select_only()
            .column(entity::notification::Column::Id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::FromId.eq(from_id))
            .filter(entity::notification::Column::Kind.eq(kind));

        query = match post_id {
            Some(post_id) => query.filter(entity::notification::Column::PostId.eq(post_id)),
            None => query.filter(entity::notification::Column::PostId.is_null()),
        };

        let ids: Vec<i32> = query.into_tuple::<i32>().all(self.db).await?;
        if ids.is_empty() {
            return Ok(ids);
        }

        entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Id.is_in(ids.clone()))
            .exec(self.db)
            .await?;

        Ok(ids)
    }

    async fn populate(
        &self,
        entities: Vec<entity::notification::Model>,
    ) -> Result<Vec<Notification>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let actors = UserRepository::new(self.db)
            .find_summaries(entities.iter().map(|notification| notification.from_id))
            .await?;

        let post_ids: Vec<i32> = entities
            .iter()
            .filter_map(|notification| notification.post_id)
            .collect();
        let posts: HashMap<i32, entity::post::Model> = if post_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Post::find()
                .filter(entity::post::Column::Id.is_in(post_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|post| (post.id, post))
                .collect()
        };

        entities
            .into_iter()
            .map(|entity| {
                let from = summary_for(&actors, entity.from_id)?;
                let post = entity
                    .post_id
                    .and_then(|post_id| posts.get(&post_id).cloned())
                    .map(NotificationPost::from_entity);

                Ok(Notification {
                    id: entity.id,
                    user_id: entity.user_id,
                    from,
                    kind: entity.kind,
                    post,
                    is_read: entity.is_read,
                    created_at: entity.created_at,
                })
            })
            .collect()
    }
}
