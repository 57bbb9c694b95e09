//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Models that are cached derive `Serialize`/`Deserialize`; their JSON is internal to
//! the cache and independent of the API DTOs.

pub mod comment;
pub mod media;
pub mod notification;
pub mod post;
pub mod story;
pub mod user;
