use sea_orm_migration::{prelude::*, schema::*};

use super::m20261002_000005_create_vote_table::Vote;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VoteOption::Table)
                    .if_not_exists()
                    .col(pk_auto(VoteOption::Id))
                    .col(integer(VoteOption::VoteId))
                    .col(string(VoteOption::Name))
                    .col(boolean(VoteOption::Removed).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_option_vote_id")
                            .from(VoteOption::Table, VoteOption::VoteId)
                            .to(Vote::Table, Vote::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VoteOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VoteOption {
    Table,
    Id,
    VoteId,
    Name,
    Removed,
}
