//! Notification creation, retraction and delivery.
//!
//! Every stored notification is pushed to the recipient's socket room as soon
//! as it is created, and every retraction is announced with its id so clients
//! can drop it from their list.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{notification::NotificationRepository, user::UserRepository},
    error::AppError,
    model::notification::{CreateNotificationParam, Notification},
    realtime::{NotificationHub, ServerEvent},
    util::mention::extract_mentions,
};
use entity::notification::NotificationKind;

/// Size of the notification feed returned to a user.
pub const RECENT_LIMIT: u64 = 50;

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a NotificationHub,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a NotificationHub) -> Self {
        Self { db, hub }
    }

    /// Stores a notification and pushes it to the recipient's room.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The stored notification, populated
    /// - `Err(AppError::DbErr)` - Insert or reload failed
    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        let created = repo.create(param).await?;
        let notification = repo.find_by_id(created.id).await?.ok_or_else(|| {
            AppError::InternalError(format!("Notification {} vanished after insert", created.id))
        })?;

        let delivered = self
            .hub
            .emit(
                param.user_id,
                ServerEvent::NewNotification(notification.clone().into_dto()),
            )
            .await;
        tracing::debug!(
            "Notification {} delivered to {} socket(s) of user {}",
            notification.id,
            delivered,
            param.user_id
        );

        Ok(notification)
    }

    /// Like [`create`](Self::create), but a failure is only logged.
    ///
    /// Used for notifications that are a side effect of another action.
    pub async fn notify(&self, param: CreateNotificationParam) {
        if let Err(e) = self.create(param).await {
            tracing::warn!(
                "Failed to create notification for user {}: {}",
                param.user_id,
                e
            );
        }
    }

    /// Deletes the notifications produced by an action and announces their removal.
    ///
    /// # Returns
    /// Ids of the removed notifications. Failures are logged and yield an empty list.
    pub async fn retract(
        &self,
        user_id: i32,
        from_id: i32,
        kind: NotificationKind,
        post_id: Option<i32>,
    ) -> Vec<i32> {
        let ids = match NotificationRepository::new(self.db)
            .delete_matching(user_id, from_id, kind, post_id)
            .await
        {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("Failed to retract notifications for user {}: {}", user_id, e);
                return Vec::new();
            }
        };

        for id in &ids {
            self.hub
                .emit(user_id, ServerEvent::RemoveNotification(*id))
                .await;
        }

        ids
    }

    /// Sends a `mention` notification to every existing user named in `content`.
    ///
    /// The author is never notified of their own mention.
    pub async fn notify_mentions(&self, content: &str, author_id: i32, post_id: i32) {
        let usernames = extract_mentions(content);
        if usernames.is_empty() {
            return;
        }

        let users = match UserRepository::new(self.db)
            .find_by_usernames(&usernames)
            .await
        {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!("Failed to resolve mentions in post {}: {}", post_id, e);
                return;
            }
        };

        for user in users.into_iter().filter(|user| user.id != author_id) {
            self.notify(CreateNotificationParam {
                user_id: user.id,
                from_id: author_id,
                kind: NotificationKind::Mention,
                post_id: Some(post_id),
            })
            .await;
        }
    }

    /// Returns the newest [`RECENT_LIMIT`] notifications of a user.
    pub async fn get_recent(&self, user_id: i32) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_recent_for_user(user_id, RECENT_LIMIT)
            .await?)
    }

    /// Marks one of the user's notifications as read.
    ///
    /// # Returns
    /// Number of notifications modified: 0 if it is not the user's or does not exist
    pub async fn mark_read(&self, notification_id: i32, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_read(notification_id, user_id)
            .await?)
    }

    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?)
    }
}
