use super::{png_upload, Harness};
use crate::server::{
    error::AppError, model::user::User, realtime::ServerEvent, service::comment::CommentService,
    service::post::PostService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_detail;
mod like;
