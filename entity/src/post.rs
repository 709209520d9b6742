use sea_orm::entity::prelude::*;

/// Board a post is published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum BoardType {
    #[sea_orm(string_value = "free")]
    Free,
    #[sea_orm(string_value = "notice")]
    Notice,
    #[sea_orm(string_value = "question")]
    Question,
    #[sea_orm(string_value = "study")]
    Study,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub author_id: i32,
    pub board_type: BoardType,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub removed: bool,
    pub reported: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::AuthorId",
        to = "super::member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Member,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
