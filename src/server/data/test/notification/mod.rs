use crate::server::{
    data::notification::NotificationRepository, model::notification::CreateNotificationParam,
};
use chrono::{Duration, Utc};
use entity::notification::NotificationKind;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_matching;
mod mark_read;
