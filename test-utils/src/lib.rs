//! Murmur Test Utils
//!
//! Shared fixtures for the murmur repository and service tests. Every test gets
//! its own in-memory SQLite database holding only the tables it asks for.
//!
//! - **TestBuilder**: picks the tables (`with_table`, or presets such as
//!   `with_post_tables`) and builds the context
//! - **TestContext**: owns the database connection
//! - **factory**: inserts users, posts, comments, stories and notifications
//!   with unique defaults
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn likes_a_post() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_post_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (author, post) = factory::create_post_with_author(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
