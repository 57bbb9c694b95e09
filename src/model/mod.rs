//! JSON request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod auth;
pub mod comment;
pub mod media;
pub mod notification;
pub mod post;
pub mod story;
pub mod user;
