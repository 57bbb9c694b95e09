//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let post = factory::post::create_post(&db, user.id).await?;
//!
//!     let (author, post) = factory::helpers::create_post_with_author(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("alice")
//!     .email("alice@example.com")
//!     .build()
//!     .await?;
//!
//! let story = factory::story::StoryFactory::new(&db, user.id)
//!     .expires_at(Utc::now() - Duration::hours(1))
//!     .build()
//!     .await?;
//! ```

pub mod comment;
pub mod helpers;
pub mod notification;
pub mod post;
pub mod story;
pub mod user;

pub use comment::create_comment;
pub use helpers::{create_follow, create_post_with_author};
pub use notification::create_notification;
pub use post::create_post;
pub use story::create_story;
pub use user::create_user;
