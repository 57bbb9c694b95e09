use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RegisterDto {
    #[validate(length(min = 3, message = "Username should be at least 3 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password should be at least 6 characters"))]
    pub password: String,
}

/// Missing fields default to empty so the validator reports them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct LoginDto {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password should be at least 6 characters"))]
    pub password: String,
}

/// Body of `POST /api/auth/login/google`: the ID token issued to the browser.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct GoogleLoginDto {
    #[validate(length(min = 1, message = "Google credential is required"))]
    pub credential: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponseDto {
    pub success: bool,
    pub message: String,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurrentUserDto {
    pub id: i32,
    pub username: String,
    pub avatar: Option<String>,
}
