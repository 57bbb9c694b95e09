pub use sea_orm_migration::prelude::*;

mod m20251210_000001_create_user_table;
mod m20251210_000002_create_post_table;
mod m20251210_000003_create_comment_table;
mod m20251210_000004_create_story_table;
mod m20251210_000005_create_notification_table;
mod m20251210_000006_create_message_table;
mod m20251211_000007_create_follow_table;
mod m20251211_000008_create_like_tables;
mod m20251211_000009_create_story_activity_tables;
mod m20251211_000010_create_saved_post_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251210_000001_create_user_table::Migration),
            Box::new(m20251210_000002_create_post_table::Migration),
            Box::new(m20251210_000003_create_comment_table::Migration),
            Box::new(m20251210_000004_create_story_table::Migration),
            Box::new(m20251210_000005_create_notification_table::Migration),
            Box::new(m20251210_000006_create_message_table::Migration),
            Box::new(m20251211_000007_create_follow_table::Migration),
            Box::new(m20251211_000008_create_like_tables::Migration),
            Box::new(m20251211_000009_create_story_activity_tables::Migration),
            Box::new(m20251211_000010_create_saved_post_table::Migration),
        ]
    }
}
