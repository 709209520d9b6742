use sea_orm::entity::prelude::*;

/// One member's selection of one option. Multiple-choice votes produce one row per option.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vote_ballot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    pub vote_id: i32,
    pub vote_option_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Member,
    #[sea_orm(
        belongs_to = "super::vote::Entity",
        from = "Column::VoteId",
        to = "super::vote::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Vote,
    #[sea_orm(
        belongs_to = "super::vote_option::Entity",
        from = "Column::VoteOptionId",
        to = "super::vote_option::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    VoteOption,
}

impl ActiveModelBehavior for ActiveModel {}
