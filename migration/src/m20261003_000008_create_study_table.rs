use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Study::Table)
                    .if_not_exists()
                    .col(pk_auto(Study::Id))
                    .col(string(Study::Name))
                    .col(text(Study::Intro))
                    .col(integer(Study::MaxMembers))
                    .col(boolean(Study::Removed).default(false))
                    .col(
                        timestamp(Study::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Study::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Study {
    Table,
    Id,
    Name,
    Intro,
    MaxMembers,
    Removed,
    CreatedAt,
}
