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
        story::StoryDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::story::Story,
        service::story::StoryService,
        state::AppState,
        util::{form::FormData, parse::parse_id},
    },
};

/// POST /api/stories - Publish a story
///
/// Multipart with a required `media` file. Stories expire after 24 hours.
///
/// # Returns
/// - `201 Created`: The created story
/// - `400 Bad Request`: No media attached, or media rejected
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    mut form: FormData,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;

    let story = StoryService::new(&state.db, &state.cache, state.media.as_ref())
        .create(&user, form.take_file("media"))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(story.into_dto()))))
}

/// GET /api/stories - Every active story, newest first
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stories = StoryService::new(&state.db, &state.cache, state.media.as_ref())
        .get_all()
        .await?;

    let stories: Vec<StoryDto> = stories.into_iter().map(Story::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(stories))))
}

/// GET /api/stories/user/{userId} - Active stories of one user
pub async fn get_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_id(&user_id, "user")?;

    let stories = StoryService::new(&state.db, &state.cache, state.media.as_ref())
        .get_by_user(user_id)
        .await?;

    let stories: Vec<StoryDto> = stories.into_iter().map(Story::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(stories))))
}

/// POST /api/stories/{storyId}/view - Record that the caller viewed a story
pub async fn view(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(story_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let story_id = parse_id(&story_id, "story")?;

    let story = StoryService::new(&state.db, &state.cache, state.media.as_ref())
        .view(&user, story_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(story.into_dto()))))
}

/// POST /api/stories/{storyId}/like - Like a story
pub async fn like(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(story_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let story_id = parse_id(&story_id, "story")?;

    let story = StoryService::new(&state.db, &state.cache, state.media.as_ref())
        .like(&user, story_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(story.into_dto()))))
}

/// POST /api/stories/{storyId}/unlike - Remove a like from a story
pub async fn unlike(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(story_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let story_id = parse_id(&story_id, "story")?;

    let story = StoryService::new(&state.db, &state.cache, state.media.as_ref())
        .unlike(&user, story_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(story.into_dto()))))
}

/// DELETE /api/stories/{storyId} - Delete one of the caller's stories
///
/// # Returns
/// - `200 OK`: Story deleted
/// - `403 Forbidden`: Caller is not the author
/// - `404 Not Found`: No story with that id
pub async fn delete(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(story_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;
    let story_id = parse_id(&story_id, "story")?;

    StoryService::new(&state.db, &state.cache, state.media.as_ref())
        .delete(&user, story_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Story deleted successfully")),
    ))
}
