use sea_orm::entity::prelude::*;

/// Metadata for one stored upload. `storage_path` is relative to the upload root.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "uploaded_file")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub uploader_id: i32,
    pub original_name: String,
    #[sea_orm(unique)]
    pub stored_name: String,
    pub storage_path: String,
    pub content_type: Option<String>,
    pub size: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::UploaderId",
        to = "super::member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Member,
}

impl ActiveModelBehavior for ActiveModel {}
