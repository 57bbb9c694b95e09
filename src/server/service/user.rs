//! Profiles, follows and saved posts.
//!
//! Profiles are cached per username without any viewer-specific data. The
//! follow flags between viewer and profile owner are looked up on every
//! request, so one viewer's state never leaks to another through the cache.

use entity::notification::NotificationKind;
use sea_orm::DatabaseConnection;

use crate::server::{
    cache::{keys, Cache},
    data::{
        follow::FollowRepository, post::PostRepository, saved_post::SavedPostRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        notification::CreateNotificationParam,
        user::{FollowRelation, FollowStatus, Profile, User},
    },
    realtime::NotificationHub,
    service::notification::NotificationService,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
    hub: &'a NotificationHub,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a Cache, hub: &'a NotificationHub) -> Self {
        Self { db, cache, hub }
    }

    /// Retrieves a profile by username or numeric id, with the viewer's follow flags.
    ///
    /// The identifier is tried as a username first, so a user literally named
    /// `"42"` wins over the user with id 42.
    ///
    /// # Arguments
    /// - `identifier` - Username or decimal user id
    /// - `viewer_id` - Id of the requesting user
    ///
    /// # Returns
    /// - `Ok((Profile, FollowRelation))` - Profile and follow edges between viewer and owner
    /// - `Err(AppError::NotFound)` - No user matches the identifier
    pub async fn get_profile(
        &self,
        identifier: &str,
        viewer_id: i32,
    ) -> Result<(Profile, FollowRelation), AppError> {
        let profile = match self
            .cache
            .get_json::<Profile>(&keys::user_profile(identifier))
            .await
        {
            Some(profile) => profile,
            None => {
                let user = self.find_by_identifier(identifier).await?;
                let profile = self.load_profile(user).await?;
                self.cache
                    .set_json(&keys::user_profile(&profile.username), &profile)
                    .await;
                profile
            }
        };

        let relation = self.relation(viewer_id, profile.id).await?;

        Ok((profile, relation))
    }

    /// Makes `viewer` follow `target_id`.
    ///
    /// A new follow notifies the target. Following twice is not an error.
    ///
    /// # Returns
    /// - `Ok(FollowStatus)` - Target's follower count and the viewer's follow flags
    /// - `Err(AppError::BadRequest)` - Viewer tried to follow themselves
    /// - `Err(AppError::NotFound)` - Target does not exist
    pub async fn follow(&self, viewer: &User, target_id: i32) -> Result<FollowStatus, AppError> {
        if viewer.id == target_id {
            return Err(AppError::BadRequest("Cannot follow yourself".to_string()));
        }

        let target = self.require_user(target_id).await?;
        let follow_repo = FollowRepository::new(self.db);

        let created = follow_repo.follow(viewer.id, target.id).await?;
        self.invalidate_profiles(viewer, &target).await;

        if created {
            NotificationService::new(self.db, self.hub)
                .notify(CreateNotificationParam {
                    user_id: target.id,
                    from_id: viewer.id,
                    kind: NotificationKind::Follow,
                    post_id: None,
                })
                .await;
        }

        Ok(FollowStatus {
            followers_count: follow_repo.follower_count(target.id).await?,
            is_following: true,
            is_follow_back: follow_repo.is_following(target.id, viewer.id).await?,
        })
    }

    /// Removes the follow from `viewer` to `target_id` and retracts its notification.
    pub async fn unfollow(&self, viewer: &User, target_id: i32) -> Result<FollowStatus, AppError> {
        if viewer.id == target_id {
            return Err(AppError::BadRequest("Cannot unfollow yourself".to_string()));
        }

        let target = self.require_user(target_id).await?;
        let follow_repo = FollowRepository::new(self.db);

        follow_repo.unfollow(viewer.id, target.id).await?;
        self.invalidate_profiles(viewer, &target).await;

        NotificationService::new(self.db, self.hub)
            .retract(target.id, viewer.id, NotificationKind::Follow, None)
            .await;

        Ok(FollowStatus {
            followers_count: follow_repo.follower_count(target.id).await?,
            is_following: false,
            is_follow_back: false,
        })
    }

    /// Follow edges between the viewer and another user. Always empty for oneself.
    pub async fn check_follow(
        &self,
        viewer_id: i32,
        target_id: i32,
    ) -> Result<FollowRelation, AppError> {
        self.relation(viewer_id, target_id).await
    }

    /// Adds a post to the user's saved posts.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Saved post ids after the change
    /// - `Err(AppError::NotFound)` - Post does not exist
    pub async fn save_post(&self, user: &User, post_id: i32) -> Result<Vec<i32>, AppError> {
        if !PostRepository::new(self.db).exists(post_id).await? {
            return Err(AppError::NotFound("Post not found".to_string()));
        }

        let saved_repo = SavedPostRepository::new(self.db);
        saved_repo.save(user.id, post_id).await?;
        self.cache
            .invalidate(&[keys::user_profile(&user.username)])
            .await;

        Ok(saved_repo.get_post_ids(user.id).await?)
    }

    pub async fn unsave_post(&self, user: &User, post_id: i32) -> Result<Vec<i32>, AppError> {
        let saved_repo = SavedPostRepository::new(self.db);
        saved_repo.unsave(user.id, post_id).await?;
        self.cache
            .invalidate(&[keys::user_profile(&user.username)])
            .await;

        Ok(saved_repo.get_post_ids(user.id).await?)
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_username(identifier).await? {
            return Ok(user);
        }

        let user = match identifier.parse::<i32>() {
            Ok(id) => user_repo.find_by_id(id).await?,
            Err(_) => None,
        };

        user.ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn require_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn load_profile(&self, user: User) -> Result<Profile, AppError> {
        let follow_repo = FollowRepository::new(self.db);

        Ok(Profile {
            followers_count: follow_repo.follower_count(user.id).await?,
            following_count: follow_repo.following_count(user.id).await?,
            saved_posts: SavedPostRepository::new(self.db)
                .get_post_ids(user.id)
                .await?,
            id: user.id,
            username: user.username,
            avatar: user.avatar,
            bio: user.bio,
            role: user.role,
        })
    }

    async fn relation(&self, viewer_id: i32, other_id: i32) -> Result<FollowRelation, AppError> {
        if viewer_id == other_id {
            return Ok(FollowRelation::default());
        }

        let follow_repo = FollowRepository::new(self.db);

        Ok(FollowRelation {
            is_following: follow_repo.is_following(viewer_id, other_id).await?,
            is_followed_by: follow_repo.is_following(other_id, viewer_id).await?,
        })
    }

    async fn invalidate_profiles(&self, viewer: &User, target: &User) {
        self.cache
            .invalidate(&[
                keys::user_profile(&viewer.username),
                keys::user_profile(&target.username),
            ])
            .await;
    }
}
