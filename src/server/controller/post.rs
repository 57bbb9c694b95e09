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
        post::{PostDto, UserPostsDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::post::Post,
        service::post::PostService,
        state::AppState,
        util::{form::FormData, parse::parse_id},
    },
};

/// GET /api/posts - All posts, newest first
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db, &state.cache, &state.hub, state.media.as_ref())
        .get_all()
        .await?;

    let posts: Vec<PostDto> = posts.into_iter().map(Post::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(posts))))
}

/// GET /api/posts/user - The caller's own posts, newest first
pub async fn get_mine(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;

    let posts = PostService::new(&state.db, &state.cache, &state.hub, state.media.as_ref())
        .get_by_author(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserPostsDto {
            success: true,
            posts: posts.into_iter().map(Post::into_dto).collect(),
        }),
    ))
}

/// GET /api/posts/{id} - A post with its comments
///
/// # Returns
/// - `200 OK`: Post and comments
/// - `400 Bad Request`: Id is not a number
/// - `404 Not Found`: No post with that id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post_id = parse_id(&post_id, "post")?;

    let detail = PostService::new(&state.db, &state.cache, &state.hub, state.media.as_ref())
        .get_detail(post_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(detail.into_dto()))))
}

/// POST /api/posts - Publish a post
///
/// Multipart with `content` and an optional `media` file.
///
/// # Returns
/// - `201 Created`: The created post
/// - `400 Bad Request`: Content too short, or media rejected
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    mut form: FormData,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;

    let media = form.take_file("media");
    let content = form.text_or_default("content");

    let post = PostService::new(&state.db, &state.cache, &state.hub, state.media.as_ref())
        .create(&user, content, media)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(post.into_dto()))))
}

/// POST /api/posts/{id}/like - Like a post
pub async fn like(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let post_id = parse_id(&post_id, "post")?;

    let post = PostService::new(&state.db, &state.cache, &state.hub, state.media.as_ref())
        .like(&user, post_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(post.into_dto()))))
}

/// POST /api/posts/{id}/unlike - Remove a like
pub async fn unlike(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let post_id = parse_id(&post_id, "post")?;

    let post = PostService::new(&state.db, &state.cache, &state.hub, state.media.as_ref())
        .unlike(&user, post_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(post.into_dto()))))
}

/// DELETE /api/posts/{id} - Delete one of the caller's posts
///
/// # Returns
/// - `200 OK`: Post deleted
/// - `403 Forbidden`: Caller is not the author
/// - `404 Not Found`: No post with that id
pub async fn delete(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let post_id = parse_id(&post_id, "post")?;

    PostService::new(&state.db, &state.cache, &state.hub, state.media.as_ref())
        .delete(&user, post_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Post deleted successfully")),
    ))
}
