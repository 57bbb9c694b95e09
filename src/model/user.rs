use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub role: String,
}

/// Minimal author information embedded in posts, comments and notifications.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserSummaryDto {
    pub id: i32,
    pub username: String,
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileDto {
    pub id: i32,
    pub username: String,
    pub avatar: String,
    pub bio: String,
    pub role: String,
    pub followers_count: u64,
    pub following_count: u64,
    pub saved_posts: Vec<i32>,
    pub is_following: bool,
    pub follow_back: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FollowStatusDto {
    pub followers_count: u64,
    pub is_following: bool,
    pub is_follow_back: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FollowCheckDto {
    pub is_following: bool,
    pub is_follow_back: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedPostsDto {
    pub saved_posts: Vec<i32>,
}
