use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000002_create_post_table::Post;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vote::Table)
                    .if_not_exists()
                    .col(pk_auto(Vote::Id))
                    .col(integer(Vote::PostId))
                    .col(string(Vote::Name))
                    .col(string(Vote::Mode))
                    .col(string(Vote::Context))
                    .col(boolean(Vote::Removed).default(false))
                    .col(timestamp(Vote::StartTime))
                    .col(timestamp(Vote::EndTime))
                    .col(
                        timestamp(Vote::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_post_id")
                            .from(Vote::Table, Vote::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vote {
    Table,
    Id,
    PostId,
    Name,
    Mode,
    Context,
    Removed,
    StartTime,
    EndTime,
    CreatedAt,
}
