use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        auth::{CurrentUserDto, GoogleLoginDto, LoginDto, LoginResponseDto, RegisterDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            cookie::{AuthCookie, CsrfCookie},
        },
        model::user::User,
        service::{auth::AuthService, oauth::GoogleAuthService},
        state::AppState,
        util::{form::FormData, json::ValidatedJson},
    },
};

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the state cookie
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the cookie value.
    pub state: String,
    /// Authorization code from Google for token exchange.
    pub code: String,
}

/// POST /api/auth/register - Create a local account
///
/// Accepts multipart (with an optional `avatar` file) or JSON with `username`,
/// `email` and `password`.
///
/// # Returns
/// - `201 Created`: Account created
/// - `400 Bad Request`: Validation failed, email or username taken, or avatar rejected
pub async fn register(
    State(state): State<AppState>,
    mut form: FormData,
) -> Result<impl IntoResponse, AppError> {
    let avatar = form.take_file("avatar");
    let dto = RegisterDto {
        username: form.text_or_default("username"),
        email: form.text_or_default("email"),
        password: form.text_or_default("password"),
    };

    AuthService::new(&state.db, state.media.as_ref())
        .register(dto, avatar)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Registered successfully")),
    ))
}

/// POST /api/auth/login - Log in with email and password
///
/// # Returns
/// - `200 OK`: Session cookie set, body carries the user
/// - `400 Bad Request`: Body missing fields, validation failed or invalid credentials
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, state.media.as_ref())
        .login(dto)
        .await?;

    start_session(&state, jar, user)
}

/// POST /api/auth/login/google - Log in with a Google ID token
///
/// # Returns
/// - `200 OK`: Session cookie set, body carries the user
/// - `400 Bad Request`: No credential in the body, or email registered with a password
/// - `401 Unauthorized`: Google rejected the ID token
pub async fn google_login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<GoogleLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let profile = GoogleAuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.google_client_id,
    )
    .verify_id_token(&dto.credential)
    .await?;

    let user = AuthService::new(&state.db, state.media.as_ref())
        .resolve_google_user(profile)
        .await?;

    start_session(&state, jar, user)
}

/// GET /api/auth/google - Redirect to the Google consent screen
pub async fn google_redirect(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (url, csrf_token) = GoogleAuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.google_client_id,
    )
    .login_url();

    let jar = CsrfCookie::set(jar, csrf_token.secret().clone());

    Ok((jar, Redirect::temporary(url.as_str())))
}

/// GET /api/auth/google/callback - Complete the Google authorization-code flow
///
/// # Returns
/// - `200 OK`: Session cookie set, body carries the user
/// - `400 Bad Request`: CSRF state mismatch, failed code exchange, or email
///   registered with a password
pub async fn google_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let (jar, stored_state) = CsrfCookie::take(jar);
    if stored_state.as_deref() != Some(params.state.as_str()) {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    let profile = GoogleAuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.google_client_id,
    )
    .callback(params.code)
    .await?;

    let user = AuthService::new(&state.db, state.media.as_ref())
        .resolve_google_user(profile)
        .await?;

    start_session(&state, jar, user)
}

/// POST /api/auth/logout - Clear the session cookie
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;

    let jar = AuthCookie::new(state.production).clear(jar);

    Ok((
        StatusCode::OK,
        jar,
        Json(MessageDto::new("Logged out successfully")),
    ))
}

/// GET /api/auth/me - The authenticated user
pub async fn me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(CurrentUserDto {
            id: user.id,
            username: user.username,
            avatar: user.avatar,
        })),
    ))
}

/// Issues a session token for `user` and builds the login response.
fn start_session(
    state: &AppState,
    jar: CookieJar,
    user: User,
) -> Result<(StatusCode, CookieJar, Json<LoginResponseDto>), AppError> {
    let token = state.tokens.issue(&user)?;
    let jar = AuthCookie::new(state.production).set(jar, token);

    tracing::info!("User {} logged in", user.id);

    Ok((
        StatusCode::OK,
        jar,
        Json(LoginResponseDto {
            success: true,
            message: "Login success".to_string(),
            user: user.into_dto(),
        }),
    ))
}
