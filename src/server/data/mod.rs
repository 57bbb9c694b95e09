//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

use std::collections::HashMap;

pub mod comment;
pub mod follow;
pub mod notification;
pub mod post;
pub mod saved_post;
pub mod story;
pub mod user;

#[cfg(test)]
mod test;

/// Groups `(owner_id, member_id)` rows into member lists keyed by owner, preserving row order.
pub(crate) fn group_pairs(pairs: Vec<(i32, i32)>) -> HashMap<i32, Vec<i32>> {
    let mut grouped: HashMap<i32, Vec<i32>> = HashMap::new();
    for (owner_id, member_id) in pairs {
        grouped.entry(owner_id).or_default().push(member_id);
    }
    grouped
}
