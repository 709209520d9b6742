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
                    .table(UploadedFile::Table)
                    .if_not_exists()
                    .col(pk_auto(UploadedFile::Id))
                    .col(integer(UploadedFile::UploaderId))
                    .col(string(UploadedFile::OriginalName))
                    .col(string_uniq(UploadedFile::StoredName))
                    .col(string(UploadedFile::StoragePath))
                    .col(string_null(UploadedFile::ContentType))
                    .col(big_integer(UploadedFile::Size))
                    .col(
                        timestamp(UploadedFile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_uploaded_file_uploader_id")
                            .from(UploadedFile::Table, UploadedFile::UploaderId)
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
            .drop_table(Table::drop().table(UploadedFile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UploadedFile {
    Table,
    Id,
    UploaderId,
    OriginalName,
    StoredName,
    StoragePath,
    ContentType,
    Size,
    CreatedAt,
}
