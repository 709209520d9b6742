use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::file::{NewUploadedFile, UploadedFile};

pub struct UploadedFileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UploadedFileRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, file: NewUploadedFile) -> Result<UploadedFile, DbErr> {
        let model = entity::uploaded_file::ActiveModel {
            uploader_id: ActiveValue::Set(file.uploader_id),
            original_name: ActiveValue::Set(file.original_name),
            stored_name: ActiveValue::Set(file.stored_name),
            storage_path: ActiveValue::Set(file.storage_path.to_string_lossy().into_owned()),
            content_type: ActiveValue::Set(file.content_type),
            size: ActiveValue::Set(file.size),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(UploadedFile::from_entity(model))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<UploadedFile>, DbErr> {
        Ok(entity::prelude::UploadedFile::find_by_id(id)
            .one(self.db)
            .await?
            .map(UploadedFile::from_entity))
    }
}
