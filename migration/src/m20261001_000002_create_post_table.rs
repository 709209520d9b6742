use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(pk_auto(Post::Id))
                    .col(integer(Post::AuthorId))
                    .col(string(Post::BoardType))
                    .col(string(Post::Title))
                    .col(text(Post::Content))
                    .col(boolean(Post::Removed).default(false))
                    .col(boolean(Post::Reported).default(false))
                    .col(
                        timestamp(Post::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Post::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_author_id")
                            .from(Post::Table, Post::AuthorId)
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
                    .name("idx_post_board_type_id")
                    .table(Post::Table)
                    .col(Post::BoardType)
                    .col(Post::Id)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    AuthorId,
    BoardType,
    Title,
    Content,
    Removed,
    Reported,
    CreatedAt,
    UpdatedAt,
}
