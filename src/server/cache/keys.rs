//! Cache key builders. Every cached read and every invalidation goes through these.

pub const ALL_STORIES: &str = "allStories";

/// A post together with its comments.
pub fn post(post_id: i32) -> String {
    format!("post:{}", post_id)
}

pub fn comments(post_id: i32) -> String {
    format!("comments:{}", post_id)
}

pub fn comment(comment_id: i32) -> String {
    format!("comment:{}", comment_id)
}

pub fn all_stories() -> String {
    ALL_STORIES.to_string()
}

pub fn stories(user_id: i32) -> String {
    format!("stories:{}", user_id)
}

pub fn user_profile(username: &str) -> String {
    format!("userProfile:{}", username)
}
