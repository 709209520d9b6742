use sea_orm::entity::prelude::*;

/// Lifecycle state of a vote.
///
/// `Single` and `Multiple` are both open for ballots; the only transition is into `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum VoteMode {
    #[sea_orm(string_value = "single")]
    Single,
    #[sea_orm(string_value = "multiple")]
    Multiple,
    #[sea_orm(string_value = "closed")]
    Closed,
}

/// Where the vote was published, which decides when results become visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum VoteContext {
    #[sea_orm(string_value = "community")]
    Community,
    #[sea_orm(string_value = "study")]
    Study,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub post_id: i32,
    pub name: String,
    pub mode: VoteMode,
    pub context: VoteContext,
    pub removed: bool,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
