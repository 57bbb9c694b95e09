//! SeaORM entities for every persisted table.

pub mod prelude;

pub mod comment;
pub mod comment_like;
pub mod follow;
pub mod message;
pub mod notification;
pub mod post;
pub mod post_like;
pub mod saved_post;
pub mod story;
pub mod story_like;
pub mod story_view;
pub mod user;
