//! Real-time notification delivery over WebSockets.
//!
//! Each authenticated socket joins the room named after its user id. Services
//! push [`event::ServerEvent`]s into a room through the shared [`hub::NotificationHub`].

pub mod event;
pub mod hub;

pub use event::{ClientEvent, ServerEvent};
pub use hub::NotificationHub;
