//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks, validation and error messages
//! - **Orchestration**: Coordinating repositories, the cache, the media store and the
//!   notification hub
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Side Effects**: Cache invalidation and notification delivery after writes

pub mod auth;
pub mod comment;
pub mod media;
pub mod notification;
pub mod oauth;
pub mod post;
pub mod story;
pub mod user;

#[cfg(test)]
mod test;
