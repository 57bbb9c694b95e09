//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a post authored by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, post))` - The author and the created post
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::post::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let post = crate::factory::post::create_post(db, user.id).await?;

    Ok((user, post))
}

/// Inserts a follow edge from `follower_id` to `following_id`.
///
/// # Returns
/// - `Ok(entity::follow::Model)` - Created follow edge
/// - `Err(DbErr)` - Database error, including a duplicate edge
pub async fn create_follow(
    db: &DatabaseConnection,
    follower_id: i32,
    following_id: i32,
) -> Result<entity::follow::Model, DbErr> {
    entity::follow::ActiveModel {
        follower_id: ActiveValue::Set(follower_id),
        following_id: ActiveValue::Set(following_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
