use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::server::{
    config::Config,
    controller::{auth, comment, notification, post, story, user, ws},
    model::media::MAX_UPLOAD_BYTES,
    startup,
    state::AppState,
};

/// Room for the largest upload plus the other multipart fields.
const BODY_LIMIT_BYTES: usize = MAX_UPLOAD_BYTES + 1024 * 1024;

pub fn router(config: &Config) -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes())
        .nest("/api/user", user_routes())
        .nest("/api/posts", post_routes())
        .nest("/api/comments", comment_routes())
        .nest("/api/notifications", notification_routes())
        .nest("/api/stories", story_routes())
        .route("/ws", get(ws::connect))
        .nest_service(&config.media_url_prefix, ServeDir::new(&config.media_dir))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(startup::setup_cors(config))
        .layer(TraceLayer::new_for_http())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/login/google", post(auth::google_login))
        .route("/google", get(auth::google_redirect))
        .route("/google/callback", get(auth::google_callback))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/{identifier}", get(user::get_profile))
        .route("/follow/{id}", post(user::follow))
        .route("/unfollow/{id}", post(user::unfollow))
        .route("/check-follow/{id}", get(user::check_follow))
        .route("/save/{id}", post(user::save_post))
        .route("/unsave/{id}", post(user::unsave_post))
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(post::get_all).post(post::create))
        .route("/user", get(post::get_mine))
        .route("/{id}", get(post::get_by_id).delete(post::delete))
        .route("/{id}/like", post(post::like))
        .route("/{id}/unlike", post(post::unlike))
}

fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(comment::get_by_post)
                .post(comment::create)
                .delete(comment::delete),
        )
        .route("/{id}/like", post(comment::like))
        .route("/{id}/unlike", post(comment::unlike))
}

fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::get_recent))
        .route("/read-all", patch(notification::mark_all_read))
        .route("/{id}/read", patch(notification::mark_read))
}

fn story_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(story::get_all).post(story::create))
        .route("/user/{id}", get(story::get_by_user))
        .route("/{id}", delete(story::delete))
        .route("/{id}/view", post(story::view))
        .route("/{id}/like", post(story::like))
        .route("/{id}/unlike", post(story::unlike))
}
