use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::model::file::UploadedFileDto;

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub id: i32,
    pub uploader_id: i32,
    pub original_name: String,
    pub stored_name: String,
    /// Path relative to the upload root.
    pub storage_path: PathBuf,
    pub content_type: Option<String>,
    pub size: i64,
    pub created_at: DateTime<Utc>,
}

impl UploadedFile {
    pub fn from_entity(entity: entity::uploaded_file::Model) -> Self {
        Self {
            id: entity.id,
            uploader_id: entity.uploader_id,
            original_name: entity.original_name,
            stored_name: entity.stored_name,
            storage_path: PathBuf::from(entity.storage_path),
            content_type: entity.content_type,
            size: entity.size,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UploadedFileDto {
        UploadedFileDto {
            id: self.id,
            original_name: self.original_name,
            stored_name: self.stored_name,
            content_type: self.content_type,
            size: self.size,
            created_at: self.created_at,
        }
    }
}

/// One part of a multipart upload.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub original_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Metadata of a file written to disk, ready to be recorded.
#[derive(Debug, Clone)]
pub struct NewUploadedFile {
    pub uploader_id: i32,
    pub original_name: String,
    pub stored_name: String,
    pub storage_path: PathBuf,
    pub content_type: Option<String>,
    pub size: i64,
}
