use crate::server::{
    data::post::PostRepository,
    model::{
        media::{MediaDescriptor, ResourceType},
        post::CreatePostParam,
    },
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod like;
