use tempfile::TempDir;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use uuid::Uuid;

use crate::server::{
    cache::Cache,
    media::LocalMediaStore,
    model::media::MediaUpload,
    realtime::{NotificationHub, ServerEvent},
};

mod notification;
mod post;
mod story;
mod user;

/// Shared collaborators for service tests: an in-memory cache, a hub and a
/// media store rooted in a temporary directory.
struct Harness {
    cache: Cache,
    hub: NotificationHub,
    media: LocalMediaStore,
    dir: TempDir,
}

impl Harness {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        Self {
            cache: Cache::in_memory(),
            hub: NotificationHub::new(),
            media: LocalMediaStore::new(dir.path(), "/media"),
            dir,
        }
    }

    /// Joins `user_id`'s room and returns the receiving end of the connection.
    async fn subscribe(&self, user_id: i32) -> UnboundedReceiver<ServerEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.hub.join(user_id, Uuid::new_v4(), sender).await;
        receiver
    }

    fn stored_file_exists(&self, public_id: &str) -> bool {
        self.dir.path().join(public_id).exists()
    }
}

fn png_upload(bytes: &[u8]) -> MediaUpload {
    MediaUpload {
        bytes: bytes.to_vec(),
        content_type: "image/png".to_string(),
        file_name: Some("photo.png".to_string()),
    }
}
