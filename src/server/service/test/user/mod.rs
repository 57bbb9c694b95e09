use super::Harness;
use crate::server::{
    error::AppError, model::user::User, realtime::ServerEvent, service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod save_post;
