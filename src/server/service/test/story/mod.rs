use super::{png_upload, Harness};
use crate::server::{error::AppError, model::user::User, service::story::StoryService};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod react;
