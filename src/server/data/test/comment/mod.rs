use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod like;
