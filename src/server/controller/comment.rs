use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        comment::{CommentDto, CreateCommentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::comment::Comment,
        service::comment::CommentService, state::AppState,
        util::{json::ValidatedJson, parse::parse_id},
    },
};

/// POST /api/comments/{postId} - Comment on a post
///
/// # Returns
/// - `201 Created`: The created comment
/// - `400 Bad Request`: Empty content or invalid id
/// - `404 Not Found`: No post with that id
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(post_id): Path<String>,
    ValidatedJson(dto): ValidatedJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let post_id = parse_id(&post_id, "post")?;

    let comment = CommentService::new(&state.db, &state.cache, &state.hub)
        .create(&user, post_id, dto.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(comment.into_dto())),
    ))
}

/// GET /api/comments/{postId} - Comments of a post, newest first
pub async fn get_by_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post_id = parse_id(&post_id, "post")?;

    let comments = CommentService::new(&state.db, &state.cache, &state.hub)
        .get_by_post(post_id)
        .await?;

    let comments: Vec<CommentDto> = comments.into_iter().map(Comment::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(comments))))
}

/// POST /api/comments/{commentId}/like - Like a comment
pub async fn like(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let comment_id = parse_id(&comment_id, "comment")?;

    let comment = CommentService::new(&state.db, &state.cache, &state.hub)
        .like(&user, comment_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(comment.into_dto()))))
}

/// POST /api/comments/{commentId}/unlike - Remove a like from a comment
pub async fn unlike(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let comment_id = parse_id(&comment_id, "comment")?;

    let comment = CommentService::new(&state.db, &state.cache, &state.hub)
        .unlike(&user, comment_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(comment.into_dto()))))
}

/// DELETE /api/comments/{commentId} - Delete one of the caller's comments
///
/// # Returns
/// - `200 OK`: Comment deleted
/// - `403 Forbidden`: Caller is not the author
/// - `404 Not Found`: No comment with that id
pub async fn delete(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let comment_id = parse_id(&comment_id, "comment")?;

    CommentService::new(&state.db, &state.cache, &state.hub)
        .delete(&user, comment_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Comment deleted successfully")),
    ))
}
