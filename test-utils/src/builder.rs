use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Post, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Post)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user table and its follow edges.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(Follow)
    }

    /// Adds every table a post or comment operation can touch.
    ///
    /// Includes users, posts, comments, their like sets, saved posts and
    /// notifications, in dependency order.
    pub fn with_post_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Post)
            .with_table(Comment)
            .with_table(PostLike)
            .with_table(CommentLike)
            .with_table(SavedPost)
            .with_table(Notification)
    }

    /// Adds users, stories and the story view/like sets.
    pub fn with_story_tables(self) -> Self {
        self.with_table(User)
            .with_table(Story)
            .with_table(StoryView)
            .with_table(StoryLike)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_post_tables()
            .with_table(Story)
            .with_table(StoryView)
            .with_table(StoryLike)
            .with_table(Message)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
