//! Comments on posts.
//!
//! Comment changes invalidate the cached post detail as well, since it embeds
//! the comment list.

use entity::notification::NotificationKind;
use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::{
    model::comment::CreateCommentDto,
    server::{
        cache::{keys, Cache},
        data::{comment::CommentRepository, post::PostRepository},
        error::AppError,
        model::{
            comment::{Comment, CreateCommentParam},
            notification::CreateNotificationParam,
            user::User,
        },
        realtime::NotificationHub,
        service::notification::NotificationService,
    },
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
    hub: &'a NotificationHub,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache, hub: &'a NotificationHub) -> Self {
        Self { db, cache, hub }
    }

    /// Adds a comment to a post.
    ///
    /// The post author is notified unless they wrote the comment, and every
    /// mentioned user gets a `mention` notification.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::Validation)` - Empty content
    /// - `Err(AppError::NotFound)` - No post with that id
    pub async fn create(
        &self,
        author: &User,
        post_id: i32,
        content: String,
    ) -> Result<Comment, AppError> {
        let dto = CreateCommentDto { content };
        dto.validate()?;

        let Some(post) = PostRepository::new(self.db).find_by_id(post_id).await? else {
            return Err(AppError::NotFound("Post not found".to_string()));
        };

        let repo = CommentRepository::new(self.db);
        let created = repo
            .create(CreateCommentParam {
                author_id: author.id,
                post_id,
                content: dto.content,
            })
            .await?;

        self.invalidate_post(post_id).await;

        let notifications = NotificationService::new(self.db, self.hub);
        if post.author.id != author.id {
            notifications
                .notify(CreateNotificationParam {
                    user_id: post.author.id,
                    from_id: author.id,
                    kind: NotificationKind::Comment,
                    post_id: Some(post_id),
                })
                .await;
        }
        notifications
            .notify_mentions(&created.content, author.id, post_id)
            .await;

        repo.find_by_id(created.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    /// Comments of a post, newest first, read through the `comments:{postId}` cache entry.
    pub async fn get_by_post(&self, post_id: i32) -> Result<Vec<Comment>, AppError> {
        let key = keys::comments(post_id);
        if let Some(comments) = self.cache.get_json::<Vec<Comment>>(&key).await {
            return Ok(comments);
        }

        if !PostRepository::new(self.db).exists(post_id).await? {
            return Err(AppError::NotFound("Post not found".to_string()));
        }

        let comments = CommentRepository::new(self.db).get_by_post(post_id).await?;
        self.cache.set_json(&key, &comments).await;

        Ok(comments)
    }

    /// Adds the user to the comment's likes.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The comment with its updated like set
    /// - `Err(AppError::BadRequest)` - No comment with that id
    pub async fn like(&self, user: &User, comment_id: i32) -> Result<Comment, AppError> {
        let comment = self.require_for_reaction(comment_id).await?;

        CommentRepository::new(self.db)
            .like(comment_id, user.id)
            .await?;
        self.invalidate_comment(&comment).await;

        self.reload(comment_id).await
    }

    pub async fn unlike(&self, user: &User, comment_id: i32) -> Result<Comment, AppError> {
        let comment = self.require_for_reaction(comment_id).await?;

        CommentRepository::new(self.db)
            .unlike(comment_id, user.id)
            .await?;
        self.invalidate_comment(&comment).await;

        self.reload(comment_id).await
    }

    /// Deletes a comment written by `user`.
    ///
    /// # Returns
    /// - `Ok(())` - Comment deleted
    /// - `Err(AppError::NotFound)` - No comment with that id
    /// - `Err(AppError::Forbidden)` - `user` is not the author
    pub async fn delete(&self, user: &User, comment_id: i32) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);

        let Some(comment) = repo.find_by_id(comment_id).await? else {
            return Err(AppError::NotFound("Comment not found".to_string()));
        };
        if comment.author.id != user.id {
            return Err(AppError::Forbidden(
                "You are not authorized to delete this comment".to_string(),
            ));
        }

        repo.delete(comment_id).await?;
        self.invalidate_comment(&comment).await;

        Ok(())
    }

    async fn require_for_reaction(&self, comment_id: i32) -> Result<Comment, AppError> {
        CommentRepository::new(self.db)
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Comment not found".to_string()))
    }

    async fn reload(&self, comment_id: i32) -> Result<Comment, AppError> {
        CommentRepository::new(self.db)
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    async fn invalidate_post(&self, post_id: i32) {
        self.cache
            .invalidate(&[keys::post(post_id), keys::comments(post_id)])
            .await;
    }

    async fn invalidate_comment(&self, comment: &Comment) {
        self.cache
            .invalidate(&[
                keys::comment(comment.id),
                keys::comments(comment.post_id),
                keys::post(comment.post_id),
            ])
            .await;
    }
}
