mod model;
mod server;

use std::net::SocketAddr;

use crate::server::{
    config::Config, error::AppError, realtime::NotificationHub, router,
    service::auth::token::TokenService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let cache = startup::connect_to_cache(&config).await;
    let media = startup::setup_media_store(&config).await?;

    let state = AppState {
        db,
        http_client,
        oauth_client,
        cache,
        hub: NotificationHub::new(),
        media,
        tokens: TokenService::new(&config.jwt_secret),
        google_client_id: config.google_client_id.clone(),
        production: config.production,
    };

    let app = router::router(&config).with_state(state);

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("Server listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
