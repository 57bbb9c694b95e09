//! Stories: media posts that disappear 24 hours after publishing.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    cache::{keys, Cache, DEFAULT_TTL_SECS},
    data::story::StoryRepository,
    error::AppError,
    media::MediaStore,
    model::{
        media::MediaUpload,
        story::{CreateStoryParam, Story},
        user::User,
    },
    service::media::MediaService,
};

/// Folder story media is stored under.
const STORY_MEDIA_FOLDER: &str = "stories";

pub struct StoryService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
    media: &'a dyn MediaStore,
}

impl<'a> StoryService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache, media: &'a dyn MediaStore) -> Self {
        Self { db, cache, media }
    }

    /// Publishes a story that expires in 24 hours.
    ///
    /// # Returns
    /// - `Ok(Story)` - The created story
    /// - `Err(AppError::BadRequest)` - No media, or the media was rejected
    pub async fn create(&self, user: &User, media: Option<MediaUpload>) -> Result<Story, AppError> {
        let Some(upload) = media else {
            return Err(AppError::BadRequest("Media is required".to_string()));
        };

        let media = MediaService::new(self.db, self.media)
            .upload(&upload, STORY_MEDIA_FOLDER)
            .await?;

        let repo = StoryRepository::new(self.db);
        let created = repo
            .create(CreateStoryParam::expiring_from(user.id, media, Utc::now()))
            .await?;

        self.invalidate(user.id).await;

        repo.find_active(created.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found".to_string()))
    }

    /// All unexpired stories, newest first, read through the `allStories` cache entry.
    pub async fn get_all(&self) -> Result<Vec<Story>, AppError> {
        let key = keys::all_stories();
        if let Some(stories) = self.cache.get_json::<Vec<Story>>(&key).await {
            return Ok(stories);
        }

        let stories = StoryRepository::new(self.db).get_active().await?;
        self.store(&key, &stories).await;

        Ok(stories)
    }

    /// Unexpired stories of one user, read through the `stories:{userId}` cache entry.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Story>, AppError> {
        let key = keys::stories(user_id);
        if let Some(stories) = self.cache.get_json::<Vec<Story>>(&key).await {
            return Ok(stories);
        }

        let stories = StoryRepository::new(self.db)
            .get_active_by_user(user_id)
            .await?;
        self.store(&key, &stories).await;

        Ok(stories)
    }

    /// Records that `user` has seen the story.
    ///
    /// # Returns
    /// - `Ok(Story)` - The story with its updated viewer set
    /// - `Err(AppError::NotFound)` - No such story, or it has expired
    pub async fn view(&self, user: &User, story_id: i32) -> Result<Story, AppError> {
        let story = self.require_active(story_id).await?;

        StoryRepository::new(self.db)
            .add_view(story_id, user.id)
            .await?;
        self.invalidate(story.user.id).await;

        self.require_active(story_id).await
    }

    pub async fn like(&self, user: &User, story_id: i32) -> Result<Story, AppError> {
        let story = self.require_active(story_id).await?;

        StoryRepository::new(self.db).like(story_id, user.id).await?;
        self.invalidate(story.user.id).await;

        self.require_active(story_id).await
    }

    pub async fn unlike(&self, user: &User, story_id: i32) -> Result<Story, AppError> {
        let story = self.require_active(story_id).await?;

        StoryRepository::new(self.db)
            .unlike(story_id, user.id)
            .await?;
        self.invalidate(story.user.id).await;

        self.require_active(story_id).await
    }

    /// Deletes a story owned by `user` together with its stored media.
    ///
    /// # Returns
    /// - `Ok(())` - Story deleted
    /// - `Err(AppError::NotFound)` - No such story, or it has expired
    /// - `Err(AppError::Forbidden)` - `user` does not own the story
    pub async fn delete(&self, user: &User, story_id: i32) -> Result<(), AppError> {
        let story = self.require_active(story_id).await?;
        if story.user.id != user.id {
            return Err(AppError::Forbidden(
                "You are not authorized to delete this story".to_string(),
            ));
        }

        StoryRepository::new(self.db).delete(story_id).await?;
        self.invalidate(user.id).await;

        MediaService::new(self.db, self.media)
            .release(&story.media)
            .await;

        Ok(())
    }

    async fn require_active(&self, story_id: i32) -> Result<Story, AppError> {
        StoryRepository::new(self.db)
            .find_active(story_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found".to_string()))
    }

    /// Caches a story list no longer than its first story stays visible.
    async fn store(&self, key: &str, stories: &[Story]) {
        let ttl = list_ttl(stories, Utc::now());
        if ttl > 0 {
            self.cache.set_json_with_ttl(key, &stories, ttl).await;
        }
    }

    async fn invalidate(&self, owner_id: i32) {
        self.cache
            .invalidate(&[keys::all_stories(), keys::stories(owner_id)])
            .await;
    }
}

/// Seconds until the earliest expiry in `stories`, capped at the default TTL.
fn list_ttl(stories: &[Story], now: DateTime<Utc>) -> u64 {
    stories
        .iter()
        .map(|story| (story.expires_at - now).num_seconds().max(0) as u64)
        .min()
        .map_or(DEFAULT_TTL_SECS, |secs| secs.min(DEFAULT_TTL_SECS))
}
