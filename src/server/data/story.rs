//! Story data repository.
//!
//! Every read filters on `expires_at > now`; expired rows stay in the table but
//! are never returned.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    data::{
        group_pairs,
        user::{summary_for, UserRepository},
    },
    model::story::{CreateStoryParam, Story},
};

pub struct StoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a story.
    ///
    /// # Returns
    /// - `Ok(entity::story::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateStoryParam) -> Result<entity::story::Model, DbErr> {
        entity::story::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            media_url: ActiveValue::Set(param.media.url),
            media_public_id: ActiveValue::Set(param.media.public_id),
            media_resource_type: ActiveValue::Set(param.media.resource_type.as_str().to_string()),
            expires_at: ActiveValue::Set(param.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a story that has not expired yet.
    ///
    /// # Returns
    /// - `Ok(Some(Story))` - Story found and still visible
    /// - `Ok(None)` - No such story, or it has expired
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn find_active(&self, story_id: i32) -> Result<Option<Story>, DbErr> {
        let Some(entity) = active(Utc::now())
            .filter(entity::story::Column::Id.eq(story_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.populate(vec![entity]).await?.pop())
    }

    /// Gets every visible story, newest first.
    pub async fn get_active(&self) -> Result<Vec<Story>, DbErr> {
        let entities = active(Utc::now())
            .order_by_desc(entity::story::Column::CreatedAt)
            .order_by_desc(entity::story::Column::Id)
            .all(self.db)
            .await?;

        self.populate(entities).await
    }

    /// Gets the visible stories of one user, newest first.
    pub async fn get_active_by_user(&self, user_id: i32) -> Result<Vec<Story>, DbErr> {
        let entities = active(Utc::now())
            .filter(entity::story::Column::UserId.eq(user_id))
            .order_by_desc(entity::story::Column::CreatedAt)
            .order_by_desc(entity::story::Column::Id)
            .all(self.db)
            .await?;

        self.populate(entities).await
    }

    /// Records that `user_id` viewed the story. Repeat views are ignored.
    pub async fn add_view(&self, story_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::StoryView::insert(entity::story_view::ActiveModel {
            story_id: ActiveValue::Set(story_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::story_view::Column::StoryId,
                entity::story_view::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    pub async fn like(&self, story_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::StoryLike::insert(entity::story_like::ActiveModel {
            story_id: ActiveValue::Set(story_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::story_like::Column::StoryId,
                entity::story_like::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    pub async fn unlike(&self, story_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StoryLike::delete_many()
            .filter(entity::story_like::Column::StoryId.eq(story_id))
            .filter(entity::story_like::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a story. Views and likes cascade.
    pub async fn delete(&self, story_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Story::delete_by_id(story_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether any story, expired or not, still points at a stored media file.
    pub async fn media_in_use(&self, public_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Story::find()
            .filter(entity::story::Column::MediaPublicId.eq(public_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    async fn populate(&self, entities: Vec<entity::story::Model>) -> Result<Vec<Story>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let story_ids: Vec<i32> = entities.iter().map(|story| story.id).collect();

        let users = UserRepository::new(self.db)
            .find_summaries(entities.iter().map(|story| story.user_id))
            .await?;

        let view_pairs = entity::prelude::StoryView::find()
            .select_only()
            .column(entity::story_view::Column::StoryId)
            .column(entity::story_view::Column::UserId)
            .filter(entity::story_view::Column::StoryId.is_in(story_ids.clone()))
            .order_by_asc(entity::story_view::Column::CreatedAt)
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await?;
        let mut views = group_pairs(view_pairs);

        let like_pairs = entity::prelude::StoryLike::find()
            .select_only()
            .column(entity::story_like::Column::StoryId)
            .column(entity::story_like::Column::UserId)
            .filter(entity::story_like::Column::StoryId.is_in(story_ids))
            .order_by_asc(entity::story_like::Column::CreatedAt)
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await?;
        let mut likes = group_pairs(like_pairs);

        entities
            .into_iter()
            .map(|entity| {
                let user = summary_for(&users, entity.user_id)?;
                let story_views = views.remove(&entity.id).unwrap_or_default();
                let story_likes = likes.remove(&entity.id).unwrap_or_default();

                Ok(Story::from_entity(entity, user, story_views, story_likes))
            })
            .collect()
    }
}

/// Stories still visible at `now`.
fn active(now: DateTime<Utc>) -> Select<entity::story::Entity> {
    entity::prelude::Story::find().filter(entity::story::Column::ExpiresAt.gt(now))
}
