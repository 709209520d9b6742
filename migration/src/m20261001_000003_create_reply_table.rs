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
                    .table(Reply::Table)
                    .if_not_exists()
                    .col(pk_auto(Reply::Id))
                    .col(integer(Reply::PostId))
                    .col(integer(Reply::AuthorId))
                    .col(integer_null(Reply::ParentId))
                    .col(text(Reply::Content))
                    .col(boolean(Reply::Removed).default(false))
                    .col(
                        timestamp(Reply::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Reply::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reply_post_id")
                            .from(Reply::Table, Reply::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reply_author_id")
                            .from(Reply::Table, Reply::AuthorId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reply::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reply {
    Table,
    Id,
    PostId,
    AuthorId,
    ParentId,
    Content,
    Removed,
    CreatedAt,
    UpdatedAt,
}
