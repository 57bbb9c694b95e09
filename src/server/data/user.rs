//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, lookups by each unique identity (id, email, username,
//! Google subject) and batch loading of author summaries for other repositories.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User, UserSummary};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading and updating user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with the default `user` role.
    ///
    /// # Arguments
    /// - `param` - Identity, credentials and login method of the new account
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email or username
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            google_id: ActiveValue::Set(param.google_id),
            avatar: ActiveValue::Set(param.avatar),
            bio: ActiveValue::Set(None),
            role: ActiveValue::Set(entity::user::Role::User),
            auth_provider: ActiveValue::Set(param.auth_provider),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the account linked to a Google subject identifier.
    pub async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::GoogleId.eq(google_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds every user whose username is in `usernames`.
    ///
    /// Used to resolve `@mentions`. Unknown names are skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Matching users in no particular order (empty if `usernames` is empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_usernames(&self, usernames: &[String]) -> Result<Vec<User>, DbErr> {
        if usernames.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Username.is_in(usernames.iter().cloned()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Checks whether either the email or the username is already registered.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one of them is taken
    /// - `Ok(false)` - Both are free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Email.eq(email))
                    .add(entity::user::Column::Username.eq(username)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Links a Google subject identifier to an existing account.
    ///
    /// # Returns
    /// - `Ok(())` - Updated (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_google_id(&self, user_id: i32, google_id: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::GoogleId, Expr::value(google_id))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Loads author summaries for a set of user ids.
    ///
    /// # Arguments
    /// - `user_ids` - Ids to load; duplicates are fine
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, UserSummary>)` - Summaries keyed by user id; unknown ids are absent
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_summaries(
        &self,
        user_ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, UserSummary>, DbErr> {
        let mut ids: Vec<i32> = user_ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| (entity.id, UserSummary::from_entity(entity)))
            .collect())
    }
}

/// Looks up a loaded summary, failing if a foreign key points at a missing user.
pub(crate) fn summary_for(
    summaries: &HashMap<i32, UserSummary>,
    user_id: i32,
) -> Result<UserSummary, DbErr> {
    summaries
        .get(&user_id)
        .cloned()
        .ok_or_else(|| DbErr::RecordNotFound(format!("user {}", user_id)))
}
