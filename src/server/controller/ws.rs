use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    realtime::{hub::ConnectionId, ClientEvent, NotificationHub, ServerEvent},
    state::AppState,
};

/// GET /ws - Upgrade to the notification socket
///
/// The session cookie is checked before upgrading. Once connected, the client
/// sends `join` with its own user id to start receiving notifications.
///
/// # Returns
/// - `101 Switching Protocols`: Socket opened
/// - `401 Unauthorized`: Missing or invalid session cookie
pub async fn connect(
    State(state): State<AppState>,
    jar: CookieJar,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &jar, &state.tokens)
        .require()
        .await?;

    let hub = state.hub.clone();
    Ok(ws.on_upgrade(move |socket| run_socket(socket, hub, user.id)))
}

async fn run_socket(socket: WebSocket, hub: NotificationHub, user_id: i32) {
    let connection_id: ConnectionId = Uuid::new_v4();
    let (mut sink, mut stream) = socket.split();
    let (sender, mut receiver) = mpsc::unbounded_channel::<ServerEvent>();

    let writer = tokio::spawn(async move {
        while let Some(event) = receiver.recv().await {
            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to encode socket event: {}", e);
                    continue;
                }
            };
            if sink.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(message)) = stream.next().await {
        match message {
            Message::Text(text) => {
                handle_client_event(&hub, user_id, connection_id, &sender, text.as_str()).await;
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    hub.leave_all(connection_id).await;
    writer.abort();
    tracing::debug!("Socket {} of user {} closed", connection_id, user_id);
}

async fn handle_client_event(
    hub: &NotificationHub,
    user_id: i32,
    connection_id: ConnectionId,
    sender: &mpsc::UnboundedSender<ServerEvent>,
    text: &str,
) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!("Ignoring malformed socket frame: {}", e);
            return;
        }
    };

    match event {
        ClientEvent::Join(room) => {
            if room.user_id() != Some(user_id) {
                tracing::warn!(
                    "User {} tried to join room {:?}, which is not their own",
                    user_id,
                    room
                );
                return;
            }
            hub.join(user_id, connection_id, sender.clone()).await;
            tracing::debug!("Socket {} joined room {}", connection_id, user_id);
        }
        ClientEvent::Leave(room) => {
            if let Some(room_id) = room.user_id() {
                if hub.leave(room_id, connection_id).await {
                    tracing::debug!("Socket {} left room {}", connection_id, room_id);
                }
            }
        }
    }
}
