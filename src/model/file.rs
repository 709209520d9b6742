use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadedFileDto {
    pub id: i32,
    pub original_name: String,
    pub stored_name: String,
    pub content_type: Option<String>,
    pub size: i64,
    pub created_at: DateTime<Utc>,
}

/// Files stored by one upload request, in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadedFilesDto {
    pub files: Vec<UploadedFileDto>,
}
