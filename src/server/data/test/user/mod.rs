use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use entity::user::AuthProvider;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod find_summaries;
mod set_google_id;
