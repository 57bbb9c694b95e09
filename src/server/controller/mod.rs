//! HTTP request handlers.
//!
//! Controllers authenticate the caller through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! parse path ids, call into the service layer and convert domain models to DTOs.

pub mod auth;
pub mod comment;
pub mod notification;
pub mod post;
pub mod story;
pub mod user;
pub mod ws;
