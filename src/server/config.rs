use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MEDIA_DIR: &str = "./uploads";
const DEFAULT_MEDIA_URL_PREFIX: &str = "/media";

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,

    pub google_auth_url: String,
    pub google_token_url: String,

    /// Unset selects the in-process cache.
    pub redis_url: Option<String>,
    pub cors_whitelist: Vec<String>,
    pub port: u16,

    pub media_dir: String,
    pub media_url_prefix: String,

    /// Production cookies are `Secure` with `SameSite=None`.
    pub production: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            google_client_id: required("GOOGLE_CLIENT_ID")?,
            google_client_secret: required("GOOGLE_CLIENT_SECRET")?,
            google_redirect_url: required("GOOGLE_REDIRECT_URL")?,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            redis_url: optional("REDIS_URL"),
            cors_whitelist: optional("CORS_WHITELIST")
                .map(|value| parse_whitelist(&value))
                .unwrap_or_default(),
            port: match optional("PORT") {
                Some(value) => parse_port(&value)?,
                None => DEFAULT_PORT,
            },
            media_dir: optional("MEDIA_DIR").unwrap_or_else(|| DEFAULT_MEDIA_DIR.to_string()),
            media_url_prefix: optional("MEDIA_URL_PREFIX")
                .unwrap_or_else(|| DEFAULT_MEDIA_URL_PREFIX.to_string()),
            production: optional("APP_ENV").is_some_and(|env| env == "production"),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_whitelist(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "PORT".to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}
