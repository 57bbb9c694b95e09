use serde::{Deserialize, Serialize};

use crate::model::notification::NotificationDto;

/// Frame pushed to clients, encoded as `{"event": ..., "data": ...}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    NewNotification(NotificationDto),
    /// Id of a notification the client should drop.
    RemoveNotification(i32),
}

/// Frame received from clients.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    Join(RoomRef),
    Leave(RoomRef),
}

/// Room name as sent by clients, which may quote the user id.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RoomRef {
    Id(i32),
    Text(String),
}

impl RoomRef {
    pub fn user_id(&self) -> Option<i32> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}
