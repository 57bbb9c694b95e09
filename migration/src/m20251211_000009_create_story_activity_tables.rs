use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251210_000001_create_user_table::User, m20251210_000004_create_story_table::Story};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoryView::Table)
                    .if_not_exists()
                    .col(integer(StoryView::StoryId))
                    .col(integer(StoryView::UserId))
                    .col(
                        timestamp_with_time_zone(StoryView::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(Index::create().col(StoryView::StoryId).col(StoryView::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_view_story_id")
                            .from(StoryView::Table, StoryView::StoryId)
                            .to(Story::Table, Story::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_view_user_id")
                            .from(StoryView::Table, StoryView::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StoryLike::Table)
                    .if_not_exists()
                    .col(integer(StoryLike::StoryId))
                    .col(integer(StoryLike::UserId))
                    .col(
                        timestamp_with_time_zone(StoryLike::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(Index::create().col(StoryLike::StoryId).col(StoryLike::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_like_story_id")
                            .from(StoryLike::Table, StoryLike::StoryId)
                            .to(Story::Table, Story::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_like_user_id")
                            .from(StoryLike::Table, StoryLike::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoryLike::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StoryView::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StoryView {
    Table,
    StoryId,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum StoryLike {
    Table,
    StoryId,
    UserId,
    CreatedAt,
}
