use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `token` cookie.
    #[error("No token provided")]
    MissingToken,

    /// The token failed signature or expiry checks, or names a deleted user.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Email/password pair does not match a local account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Google rejected the ID token, or it lacks a verified email, name or subject.
    #[error("Invalid Google token")]
    InvalidGoogleToken,

    /// The email belongs to an account created with another provider.
    #[error("Email already registered with a different login method")]
    ProviderMismatch,

    /// Exchanging the authorization code or fetching the Google profile failed.
    #[error("Google login failed: {0}")]
    GoogleLoginFailed(String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the state cookie, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` / `InvalidGoogleToken` → 401 Unauthorized
/// - `InvalidCredentials` / `ProviderMismatch` → 400 Bad Request with the error text
/// - `GoogleLoginFailed` → 400 Bad Request with "Google login failed"
/// - `CsrfValidationFailed` → 400 Bad Request with "There was an issue logging you in"
///
/// Failures with upstream detail are logged at debug level while keeping client-facing
/// messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingToken | Self::InvalidToken | Self::InvalidGoogleToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::InvalidCredentials
            | Self::ProviderMismatch
            | Self::GoogleLoginFailed(_)
            | Self::CsrfValidationFailed => StatusCode::BAD_REQUEST,
        };

        let message = match &self {
            Self::GoogleLoginFailed(reason) => {
                tracing::debug!("Google login failed: {}", reason);
                "Google login failed".to_string()
            }
            Self::CsrfValidationFailed => {
                "There was an issue logging you in, please try again.".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
