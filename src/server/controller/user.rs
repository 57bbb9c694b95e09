use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{api::ApiResponse, user::SavedPostsDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::user::UserService,
        state::AppState, util::parse::parse_id,
    },
};

/// GET /api/user/{identifier} - Get a profile by username or id
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK`: Profile with the caller's follow flags
/// - `404 Not Found`: No user matches the identifier
pub async fn get_profile(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(identifier): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;

    let (profile, relation) = UserService::new(&state.db, &state.cache, &state.hub)
        .get_profile(&identifier, viewer.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(profile.into_dto(relation))),
    ))
}

/// POST /api/user/follow/{id} - Follow a user
///
/// # Returns
/// - `200 OK`: Target's follower count and the caller's follow flags
/// - `400 Bad Request`: Invalid id, or the caller tried to follow themselves
/// - `404 Not Found`: Target does not exist
pub async fn follow(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(target_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let target_id = parse_id(&target_id, "user")?;

    let status = UserService::new(&state.db, &state.cache, &state.hub)
        .follow(&viewer, target_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(status.into_dto()))))
}

/// POST /api/user/unfollow/{id} - Unfollow a user
pub async fn unfollow(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(target_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let target_id = parse_id(&target_id, "user")?;

    let status = UserService::new(&state.db, &state.cache, &state.hub)
        .unfollow(&viewer, target_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(status.into_dto()))))
}

/// GET /api/user/check-follow/{id} - Follow edges between the caller and a user
pub async fn check_follow(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(target_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let target_id = parse_id(&target_id, "user")?;

    let relation = UserService::new(&state.db, &state.cache, &state.hub)
        .check_follow(viewer.id, target_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(relation.into_dto()))))
}

/// POST /api/user/save/{id} - Save a post
///
/// # Returns
/// - `200 OK`: Saved post ids after the change
/// - `404 Not Found`: Post does not exist
pub async fn save_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let post_id = parse_id(&post_id, "post")?;

    let saved_posts = UserService::new(&state.db, &state.cache, &state.hub)
        .save_post(&user, post_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(SavedPostsDto { saved_posts })),
    ))
}

/// POST /api/user/unsave/{id} - Remove a post from the saved posts
pub async fn unsave_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let post_id = parse_id(&post_id, "post")?;

    let saved_posts = UserService::new(&state.db, &state.cache, &state.hub)
        .unsave_post(&user, post_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(SavedPostsDto { saved_posts })),
    ))
}
