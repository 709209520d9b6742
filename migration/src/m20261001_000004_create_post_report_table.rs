use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_member_table::Member, m20261001_000002_create_post_table::Post,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostReport::Table)
                    .if_not_exists()
                    .col(pk_auto(PostReport::Id))
                    .col(integer(PostReport::PostId))
                    .col(integer(PostReport::MemberId))
                    .col(string_null(PostReport::Reason))
                    .col(
                        timestamp(PostReport::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_report_post_id")
                            .from(PostReport::Table, PostReport::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_report_member_id")
                            .from(PostReport::Table, PostReport::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_post_report_post_member")
                    .table(PostReport::Table)
                    .col(PostReport::PostId)
                    .col(PostReport::MemberId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostReport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostReport {
    Table,
    Id,
    PostId,
    MemberId,
    Reason,
    CreatedAt,
}
