//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client and OAuth2 client for Google sign-in
//! - Cache handle for cache-aside reads
//! - Notification hub holding the WebSocket rooms
//! - Media store for uploaded images and videos
//! - Token service signing session cookies

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    cache::Cache, media::MediaStore, realtime::NotificationHub,
    service::auth::token::TokenService,
};

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `Cache` and `NotificationHub` wrap an `Arc`
/// - `TokenService` holds two small keys
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for Google API calls.
    ///
    /// Configured with security settings (no redirects) to prevent SSRF
    /// vulnerabilities.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Google authorization-code flow.
    pub oauth_client: OAuth2Client,

    /// Redis or in-process cache, depending on configuration.
    pub cache: Cache,

    /// Per-user WebSocket rooms notifications are pushed to.
    pub hub: NotificationHub,

    /// Storage for uploaded avatars, post media and stories.
    pub media: Arc<dyn MediaStore>,

    /// Signs and verifies session tokens.
    pub tokens: TokenService,

    /// Expected audience of Google ID tokens.
    pub google_client_id: String,

    /// Whether cookies are issued with production attributes.
    pub production: bool,
}
