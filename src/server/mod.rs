//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations,
//! Redis (or an in-process map) for cache-aside reads and a WebSocket hub for
//! real-time notifications.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP and WebSocket handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, cache invalidation and notification side effects
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session cookies and the authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, cache, hub, media store)
//! - **Startup** (`startup`) - Initialization of tracing, database, cache, media and clients
//! - **Router** (`router`) - Axum route configuration
//! - **Cache** (`cache/`) - Cache facade over Redis or memory
//! - **Media** (`media/`) - Upload storage
//! - **Realtime** (`realtime/`) - Per-user notification rooms
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** authenticates the session cookie, parses the request, calls service
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Service** invalidates cache entries and emits notifications
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod media;
pub mod middleware;
pub mod model;
pub mod realtime;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
