//! File service: all-or-nothing multi-file upload and download.

use std::path::PathBuf;

use chrono::Utc;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::file::UploadedFileRepository,
    error::AppError,
    model::file::{IncomingFile, NewUploadedFile, UploadedFile},
    storage::{FileKind, LocalFileStore},
};

pub struct FileService<'a> {
    db: &'a DatabaseConnection,
    store: &'a LocalFileStore,
}

impl<'a> FileService<'a> {
    pub fn new(db: &'a DatabaseConnection, store: &'a LocalFileStore) -> Self {
        Self { db, store }
    }

    /// Stores every non-empty file of one upload request.
    ///
    /// Metadata is written in one transaction. On the first failure the files
    /// already written by this request are deleted again, the transaction is
    /// rolled back and nothing is kept.
    ///
    /// # Returns
    /// - `Ok(files)`: Every file stored and recorded, in request order
    /// - `Err(AppError::BadRequest)`: Request carried no non-empty file
    /// - `Err(AppError::FileUploadFail)`: A write or insert failed; nothing kept
    pub async fn upload(
        &self,
        uploader_id: i32,
        files: Vec<IncomingFile>,
    ) -> Result<Vec<UploadedFile>, AppError> {
        let files: Vec<IncomingFile> = files
            .into_iter()
            .filter(|f| !f.bytes.is_empty())
            .collect();
        if files.is_empty() {
            return Err(AppError::BadRequest("No file to upload".to_string()));
        }

        let mut written = Vec::with_capacity(files.len());

        let result = match self.db.begin().await {
            Ok(txn) => match self.store_all(&txn, uploader_id, files, &mut written).await {
                Ok(stored) => txn.commit().await.map(|_| stored).map_err(AppError::from),
                Err(e) => Err(e),
            },
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(stored) => {
                tracing::info!("Member {} uploaded {} file(s)", uploader_id, stored.len());
                Ok(stored)
            }
            Err(e) => {
                self.cleanup(&written).await;
                Err(AppError::FileUploadFail(format!("File upload failed: {}", e)))
            }
        }
    }

    /// Returns the metadata and stored bytes of a file.
    pub async fn download(&self, id: i32) -> Result<(UploadedFile, Vec<u8>), AppError> {
        let file = UploadedFileRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("File {} not found", id)))?;

        let bytes = match self.store.read(&file.storage_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::NotFound(format!(
                    "Stored content of file {} is missing",
                    id
                )));
            }
            Err(e) => return Err(e.into()),
        };

        Ok((file, bytes))
    }

    async fn store_all(
        &self,
        txn: &DatabaseTransaction,
        uploader_id: i32,
        files: Vec<IncomingFile>,
        written: &mut Vec<PathBuf>,
    ) -> Result<Vec<UploadedFile>, AppError> {
        let repo = UploadedFileRepository::new(txn);
        let now = Utc::now();
        let mut stored = Vec::with_capacity(files.len());

        for file in files {
            let kind = FileKind::classify(file.content_type.as_deref(), &file.original_name);
            let relative_dir = LocalFileStore::relative_dir(kind, now);
            let stored_name = LocalFileStore::stored_name(&file.original_name);

            let storage_path = self
                .store
                .write(&relative_dir, &stored_name, &file.bytes)
                .await?;
            written.push(storage_path.clone());

            let record = repo
                .create(NewUploadedFile {
                    uploader_id,
                    original_name: file.original_name,
                    stored_name,
                    storage_path,
                    content_type: file.content_type,
                    size: file.bytes.len() as i64,
                })
                .await?;
            stored.push(record);
        }

        Ok(stored)
    }

    async fn cleanup(&self, written: &[PathBuf]) {
        for path in written {
            if let Err(e) = self.store.remove(path).await {
                tracing::warn!("Failed to remove {} after aborted upload: {}", path.display(), e);
            } else {
                tracing::warn!("Removed {} after aborted upload", path.display());
            }
        }
    }
}
