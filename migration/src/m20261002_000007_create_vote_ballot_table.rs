use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_member_table::Member, m20261002_000005_create_vote_table::Vote,
    m20261002_000006_create_vote_option_table::VoteOption,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VoteBallot::Table)
                    .if_not_exists()
                    .col(pk_auto(VoteBallot::Id))
                    .col(integer(VoteBallot::MemberId))
                    .col(integer(VoteBallot::VoteId))
                    .col(integer(VoteBallot::VoteOptionId))
                    .col(
                        timestamp(VoteBallot::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_ballot_member_id")
                            .from(VoteBallot::Table, VoteBallot::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_ballot_vote_id")
                            .from(VoteBallot::Table, VoteBallot::VoteId)
                            .to(Vote::Table, Vote::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_ballot_vote_option_id")
                            .from(VoteBallot::Table, VoteBallot::VoteOptionId)
                            .to(VoteOption::Table, VoteOption::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vote_ballot_vote_member")
                    .table(VoteBallot::Table)
                    .col(VoteBallot::VoteId)
                    .col(VoteBallot::MemberId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VoteBallot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VoteBallot {
    Table,
    Id,
    MemberId,
    VoteId,
    VoteOptionId,
    CreatedAt,
}
