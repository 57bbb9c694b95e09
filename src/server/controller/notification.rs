use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{
        api::{ApiResponse, ModifiedCountDto},
        notification::NotificationDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::notification::Notification,
        service::notification::NotificationService, state::AppState, util::parse::parse_id,
    },
};

/// GET /api/notifications - The caller's most recent notifications
///
/// # Returns
/// - `200 OK`: Up to 50 notifications, newest first
pub async fn get_recent(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;

    let notifications = NotificationService::new(&state.db, &state.hub)
        .get_recent(user.id)
        .await?;

    let notifications: Vec<NotificationDto> = notifications
        .into_iter()
        .map(Notification::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(notifications))))
}

/// PATCH /api/notifications/{id}/read - Mark one notification as read
///
/// Only notifications addressed to the caller are touched, so marking another
/// user's notification reports zero modified rows.
pub async fn mark_read(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(notification_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let notification_id = parse_id(&notification_id, "notification")?;

    let modified = NotificationService::new(&state.db, &state.hub)
        .mark_read(notification_id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(ModifiedCountDto {
            modified_count: modified,
        })),
    ))
}

/// PATCH /api/notifications/read-all - Mark every notification of the caller as read
pub async fn mark_all_read(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;

    let modified = NotificationService::new(&state.db, &state.hub)
        .mark_all_read(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(ModifiedCountDto {
            modified_count: modified,
        })),
    ))
}
