//! Extracts `@username` mentions from post and comment bodies.

use regex::Regex;
use std::{collections::HashSet, sync::LazyLock};

static MENTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([a-zA-Z0-9_]+)").expect("Invalid mention regex"));

/// Returns the mentioned usernames in order of first appearance, deduplicated.
///
/// Usernames are matched exactly, so `@Alice` and `@alice` are different mentions.
pub fn extract_mentions(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    MENTION_REGEX
        .captures_iter(content)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .filter(|username| seen.insert(username.clone()))
        .collect()
}
