//! Posts, their likes and the cached post detail view.

use entity::notification::NotificationKind;
use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::{
    model::post::CreatePostDto,
    server::{
        cache::{keys, Cache},
        data::{
            comment::CommentRepository, post::PostRepository, saved_post::SavedPostRepository,
            user::UserRepository,
        },
        error::AppError,
        media::MediaStore,
        model::{
            media::MediaUpload,
            notification::CreateNotificationParam,
            post::{CreatePostParam, Post, PostDetail},
            user::User,
        },
        realtime::NotificationHub,
        service::{media::MediaService, notification::NotificationService},
    },
};

/// Folder post media is stored under.
const POST_MEDIA_FOLDER: &str = "posts";

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
    hub: &'a NotificationHub,
    media: &'a dyn MediaStore,
}

impl<'a> PostService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        cache: &'a Cache,
        hub: &'a NotificationHub,
        media: &'a dyn MediaStore,
    ) -> Self {
        Self {
            db,
            cache,
            hub,
            media,
        }
    }

    /// All posts, newest first.
    pub async fn get_all(&self) -> Result<Vec<Post>, AppError> {
        Ok(PostRepository::new(self.db).get_all().await?)
    }

    /// Posts written by one user, newest first.
    pub async fn get_by_author(&self, author_id: i32) -> Result<Vec<Post>, AppError> {
        Ok(PostRepository::new(self.db).get_by_author(author_id).await?)
    }

    /// Retrieves a post with its comments, reading through the `post:{id}` cache entry.
    ///
    /// # Returns
    /// - `Ok(PostDetail)` - The post and its comments, newest first
    /// - `Err(AppError::NotFound)` - No post with that id
    pub async fn get_detail(&self, post_id: i32) -> Result<PostDetail, AppError> {
        let key = keys::post(post_id);
        if let Some(detail) = self.cache.get_json::<PostDetail>(&key).await {
            return Ok(detail);
        }

        let Some(post) = PostRepository::new(self.db).find_by_id(post_id).await? else {
            return Err(AppError::NotFound("Post not found".to_string()));
        };
        let comments = CommentRepository::new(self.db).get_by_post(post_id).await?;

        let detail = PostDetail { post, comments };
        self.cache.set_json(&key, &detail).await;

        Ok(detail)
    }

    /// Publishes a post and notifies the users mentioned in it.
    ///
    /// # Arguments
    /// - `author` - The authenticated author
    /// - `content` - Post text, at least 5 characters
    /// - `media` - Optional image or video
    ///
    /// # Returns
    /// - `Ok(Post)` - The created post
    /// - `Err(AppError::Validation)` - Content too short
    /// - `Err(AppError::BadRequest)` - Media rejected
    pub async fn create(
        &self,
        author: &User,
        content: String,
        media: Option<MediaUpload>,
    ) -> Result<Post, AppError> {
        let dto = CreatePostDto { content };
        dto.validate()?;

        let media = match media {
            Some(upload) => Some(
                MediaService::new(self.db, self.media)
                    .upload(&upload, POST_MEDIA_FOLDER)
                    .await?,
            ),
            None => None,
        };

        let repo = PostRepository::new(self.db);
        let created = repo
            .create(CreatePostParam {
                author_id: author.id,
                content: dto.content,
                media,
            })
            .await?;

        NotificationService::new(self.db, self.hub)
            .notify_mentions(&created.content, author.id, created.id)
            .await;

        self.reload(created.id).await
    }

    /// Adds the user to the post's likes and notifies the author of a new like.
    ///
    /// # Returns
    /// - `Ok(Post)` - The post with its updated like set
    /// - `Err(AppError::BadRequest)` - No post with that id
    pub async fn like(&self, user: &User, post_id: i32) -> Result<Post, AppError> {
        let post = self.require_for_reaction(post_id).await?;

        let created = PostRepository::new(self.db).like(post_id, user.id).await?;
        self.cache.invalidate(&[keys::post(post_id)]).await;

        if created && post.author.id != user.id {
            NotificationService::new(self.db, self.hub)
                .notify(CreateNotificationParam {
                    user_id: post.author.id,
                    from_id: user.id,
                    kind: NotificationKind::Like,
                    post_id: Some(post_id),
                })
                .await;
        }

        self.reload(post_id).await
    }

    /// Removes the user from the post's likes and retracts the like notification.
    pub async fn unlike(&self, user: &User, post_id: i32) -> Result<Post, AppError> {
        let post = self.require_for_reaction(post_id).await?;

        PostRepository::new(self.db).unlike(post_id, user.id).await?;
        self.cache.invalidate(&[keys::post(post_id)]).await;

        NotificationService::new(self.db, self.hub)
            .retract(
                post.author.id,
                user.id,
                NotificationKind::Like,
                Some(post_id),
            )
            .await;

        self.reload(post_id).await
    }

    /// Deletes a post written by `user` together with its stored media.
    ///
    /// # Returns
    /// - `Ok(())` - Post deleted
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::Forbidden)` - `user` is not the author
    pub async fn delete(&self, user: &User, post_id: i32) -> Result<(), AppError> {
        let repo = PostRepository::new(self.db);

        let Some(post) = repo.find_by_id(post_id).await? else {
            return Err(AppError::NotFound("Post not found".to_string()));
        };
        if post.author.id != user.id {
            return Err(AppError::Forbidden(
                "You are not authorized to delete this post".to_string(),
            ));
        }

        // Saved rows cascade with the post, so collect the savers' profiles first.
        let saver_profiles = self.saver_profile_keys(post_id).await?;

        repo.delete(post_id).await?;

        let mut stale = vec![keys::post(post_id), keys::comments(post_id)];
        stale.extend(saver_profiles);
        self.cache.invalidate(&stale).await;

        if let Some(media) = &post.media {
            MediaService::new(self.db, self.media).release(media).await;
        }

        tracing::info!("User {} deleted post {}", user.id, post_id);

        Ok(())
    }

    /// Profile cache keys of every user who saved `post_id`.
    async fn saver_profile_keys(&self, post_id: i32) -> Result<Vec<String>, AppError> {
        let saver_ids = SavedPostRepository::new(self.db)
            .get_saver_ids(post_id)
            .await?;
        let savers = UserRepository::new(self.db)
            .find_summaries(saver_ids)
            .await?;

        Ok(savers
            .values()
            .map(|saver| keys::user_profile(&saver.username))
            .collect())
    }

    async fn require_for_reaction(&self, post_id: i32) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Post not found".to_string()))
    }

    async fn reload(&self, post_id: i32) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }
}
