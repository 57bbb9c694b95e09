use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::Value;

use super::{assert_error, empty_request, json_request, TestApp};
use crate::server::model::media::MAX_UPLOAD_BYTES;
use test_utils::factory;

mod create;
mod delete;
mod get_by_id;
