use super::Harness;
use crate::server::{
    error::AppError,
    model::notification::CreateNotificationParam,
    realtime::ServerEvent,
    service::notification::NotificationService,
};
use entity::notification::NotificationKind;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod notify_mentions;
