use std::{collections::HashMap, sync::Arc};

use tokio::sync::{mpsc::UnboundedSender, RwLock};
use uuid::Uuid;

use crate::server::realtime::event::ServerEvent;

/// Identifies a single WebSocket connection.
pub type ConnectionId = Uuid;

type Rooms = HashMap<i32, HashMap<ConnectionId, UnboundedSender<ServerEvent>>>;

/// Per-user rooms of connected sockets.
///
/// Cloning shares the same rooms. A user may be connected from several
/// sockets at once; every event is delivered to all of them.
#[derive(Clone, Default)]
pub struct NotificationHub {
    rooms: Arc<RwLock<Rooms>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a connection to `user_id`'s room. Joining twice replaces the sender.
    pub async fn join(
        &self,
        user_id: i32,
        connection_id: ConnectionId,
        sender: UnboundedSender<ServerEvent>,
    ) {
        let mut rooms = self.rooms.write().await;
        rooms
            .entry(user_id)
            .or_default()
            .insert(connection_id, sender);
    }

    /// Removes a connection from one room.
    ///
    /// # Returns
    /// `true` if the connection was a member of the room
    pub async fn leave(&self, user_id: i32, connection_id: ConnectionId) -> bool {
        let mut rooms = self.rooms.write().await;

        let Some(room) = rooms.get_mut(&user_id) else {
            return false;
        };
        let removed = room.remove(&connection_id).is_some();
        if room.is_empty() {
            rooms.remove(&user_id);
        }

        removed
    }

    /// Removes a connection from every room, used when the socket closes.
    pub async fn leave_all(&self, connection_id: ConnectionId) {
        let mut rooms = self.rooms.write().await;

        rooms.retain(|_, room| {
            room.remove(&connection_id);
            !room.is_empty()
        });
    }

    /// Sends an event to every connection in `user_id`'s room.
    ///
    /// Connections whose receiver has gone away are pruned. Emitting to an
    /// empty or unknown room does nothing.
    ///
    /// # Returns
    /// Number of connections the event was delivered to
    pub async fn emit(&self, user_id: i32, event: ServerEvent) -> usize {
        let mut rooms = self.rooms.write().await;

        let Some(room) = rooms.get_mut(&user_id) else {
            return 0;
        };

        room.retain(|_, sender| sender.send(event.clone()).is_ok());
        let delivered = room.len();
        if room.is_empty() {
            rooms.remove(&user_id);
        }

        delivered
    }

    pub async fn room_size(&self, user_id: i32) -> usize {
        let rooms = self.rooms.read().await;
        rooms.get(&user_id).map(HashMap::len).unwrap_or(0)
    }
}
