use std::sync::Arc;

use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    request::Parts,
    HeaderValue, Method,
};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    cache::{Cache, RedisCache},
    config::Config,
    error::{config::ConfigError, AppError},
    media::{LocalMediaStore, MediaStore},
    state::OAuth2Client,
};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` overrides the default `info,sqlx=warn` filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for Google API calls.
///
/// Redirects are disabled so a token or userinfo response can never bounce
/// the request to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for the Google authorization-code flow.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token and redirect URLs set
/// - `Err(AppError::ConfigErr)` - One of the URLs does not parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.google_auth_url.clone())
        .map_err(|e| invalid_url("GOOGLE_AUTH_URL", &config.google_auth_url, e))?;
    let token_url = TokenUrl::new(config.google_token_url.clone())
        .map_err(|e| invalid_url("GOOGLE_TOKEN_URL", &config.google_token_url, e))?;
    let redirect_url = RedirectUrl::new(config.google_redirect_url.clone())
        .map_err(|e| invalid_url("GOOGLE_REDIRECT_URL", &config.google_redirect_url, e))?;

    let client = BasicClient::new(ClientId::new(config.google_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

fn invalid_url(name: &str, value: &str, error: url::ParseError) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: error.to_string(),
    }
}

/// Selects the cache backend.
///
/// Uses Redis when `REDIS_URL` is set. If Redis cannot be reached at startup the
/// server keeps running on the in-process cache.
pub async fn connect_to_cache(config: &Config) -> Cache {
    let Some(redis_url) = config.redis_url.as_deref() else {
        tracing::info!("REDIS_URL not set, using in-memory cache");
        return Cache::in_memory();
    };

    match RedisCache::connect(redis_url).await {
        Ok(redis) => {
            tracing::info!("Connected to Redis cache");
            Cache::new(redis)
        }
        Err(e) => {
            tracing::warn!("Redis unavailable, falling back to in-memory cache: {}", e);
            Cache::in_memory()
        }
    }
}

/// Creates the upload directory and the filesystem media store on top of it.
///
/// # Returns
/// - `Ok(Arc<dyn MediaStore>)` - Store rooted at `MEDIA_DIR`
/// - `Err(AppError::IoErr)` - Directory could not be created
pub async fn setup_media_store(config: &Config) -> Result<Arc<dyn MediaStore>, AppError> {
    tokio::fs::create_dir_all(&config.media_dir).await?;

    Ok(Arc::new(LocalMediaStore::new(
        config.media_dir.clone(),
        config.media_url_prefix.clone(),
    )))
}

/// CORS policy allowing credentialed requests from whitelisted origins.
///
/// Requests without an `Origin` header are not subject to CORS and pass through.
pub fn setup_cors(config: &Config) -> CorsLayer {
    let whitelist = config.cors_whitelist.clone();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _request: &Parts| {
                origin
                    .to_str()
                    .map(|origin| whitelist.iter().any(|allowed| allowed == origin))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}
