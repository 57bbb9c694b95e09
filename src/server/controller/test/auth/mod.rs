use axum::http::{header, Method, StatusCode};
use serde_json::Value;

use super::{assert_error, empty_request, json_request, TestApp};

mod login;
mod me;
mod register;
