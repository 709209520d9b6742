use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_member_table::Member, m20261003_000008_create_study_table::Study,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudyMember::Table)
                    .if_not_exists()
                    .col(pk_auto(StudyMember::Id))
                    .col(integer(StudyMember::StudyId))
                    .col(integer(StudyMember::MemberId))
                    .col(string(StudyMember::Status))
                    .col(string(StudyMember::Role))
                    .col(boolean(StudyMember::Removed).default(false))
                    .col(string_null(StudyMember::JoinIntro))
                    .col(
                        timestamp(StudyMember::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(StudyMember::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_member_study_id")
                            .from(StudyMember::Table, StudyMember::StudyId)
                            .to(Study::Table, Study::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_member_member_id")
                            .from(StudyMember::Table, StudyMember::MemberId)
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
            .drop_table(Table::drop().table(StudyMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudyMember {
    Table,
    Id,
    StudyId,
    MemberId,
    Status,
    Role,
    Removed,
    JoinIntro,
    CreatedAt,
    UpdatedAt,
}
