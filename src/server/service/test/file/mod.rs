use std::path::PathBuf;

use crate::server::{
    error::AppError, model::file::IncomingFile, service::file::FileService,
    storage::LocalFileStore,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod download;
mod upload;

fn temp_store() -> LocalFileStore {
    LocalFileStore::new(std::env::temp_dir().join(format!("spinner-upload-{}", uuid::Uuid::new_v4())))
}

fn incoming(name: &str, content_type: Option<&str>, bytes: &[u8]) -> IncomingFile {
    IncomingFile {
        original_name: name.to_string(),
        content_type: content_type.map(str::to_string),
        bytes: bytes.to_vec(),
    }
}
