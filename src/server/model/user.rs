//! User domain models and parameters.
//!
//! Provides the application user with its login method and role, the minimal
//! summary embedded in posts, comments and notifications, and the cached
//! profile view with follow counts.

use chrono::{DateTime, Utc};
use entity::user::{AuthProvider, Role};
use serde::{Deserialize, Serialize};

use crate::model::user::{
    FollowCheckDto, FollowStatusDto, ProfileDto, UserDto, UserSummaryDto,
};

/// Registered account with credentials and profile fields.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i32,
    /// Unique handle, also used in mentions and profile lookups.
    pub username: String,
    /// Unique email address used to log in.
    pub email: String,
    /// Argon2 PHC string. `None` for accounts created through Google.
    pub password_hash: Option<String>,
    /// Google subject identifier once the account is linked.
    pub google_id: Option<String>,
    /// Public URL of the avatar image.
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub role: Role,
    /// Login method the account was created with.
    pub auth_provider: AuthProvider,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password,
            google_id: entity.google_id,
            avatar: entity.avatar,
            bio: entity.bio,
            role: entity.role,
            auth_provider: entity.auth_provider,
            created_at: entity.created_at,
        }
    }

    /// Converts the user to the login response DTO. The password hash is never exposed.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            avatar: self.avatar,
            role: role_name(self.role).to_string(),
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Author information embedded in other models.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub avatar: Option<String>,
}

impl UserSummary {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            avatar: entity.avatar,
        }
    }

    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            username: self.username,
            avatar: self.avatar,
        }
    }
}

/// Parameters for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    /// Argon2 PHC string, `None` for federated accounts.
    pub password_hash: Option<String>,
    pub google_id: Option<String>,
    pub avatar: Option<String>,
    pub auth_provider: AuthProvider,
}

/// Public profile of a user, independent of who is viewing it.
///
/// This is the value cached under `userProfile:{username}`; viewer-specific
/// follow flags are added by [`Profile::into_dto`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i32,
    pub username: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub role: Role,
    pub followers_count: u64,
    pub following_count: u64,
    /// Ids of the posts the user saved, oldest first.
    pub saved_posts: Vec<i32>,
}

impl Profile {
    /// Converts the profile to a DTO for one viewer.
    ///
    /// # Arguments
    /// - `relation` - Follow edges between the viewer and this user
    pub fn into_dto(self, relation: FollowRelation) -> ProfileDto {
        ProfileDto {
            id: self.id,
            username: self.username,
            avatar: self.avatar.unwrap_or_default(),
            bio: self.bio.unwrap_or_default(),
            role: role_name(self.role).to_string(),
            followers_count: self.followers_count,
            following_count: self.following_count,
            saved_posts: self.saved_posts,
            is_following: relation.is_following,
            follow_back: relation.is_followed_by && !relation.is_following,
        }
    }
}

/// Follow edges between a viewer and another user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FollowRelation {
    /// Viewer follows the other user.
    pub is_following: bool,
    /// The other user follows the viewer.
    pub is_followed_by: bool,
}

impl FollowRelation {
    pub fn into_dto(self) -> FollowCheckDto {
        FollowCheckDto {
            is_following: self.is_following,
            is_follow_back: self.is_followed_by,
        }
    }
}

/// Result of a follow or unfollow, as seen by the actor.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowStatus {
    /// Follower count of the target after the change.
    pub followers_count: u64,
    pub is_following: bool,
    pub is_follow_back: bool,
}

impl FollowStatus {
    pub fn into_dto(self) -> FollowStatusDto {
        FollowStatusDto {
            followers_count: self.followers_count,
            is_following: self.is_following,
            is_follow_back: self.is_follow_back,
        }
    }
}

/// Wire name of a role.
pub fn role_name(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Admin => "admin",
    }
}
