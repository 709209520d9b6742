//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone: the database
//! connection is a pool handle and the file store only holds its root path.

use sea_orm::DatabaseConnection;

use crate::server::storage::LocalFileStore;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Disk storage for uploaded files.
    pub file_store: LocalFileStore,

    /// Distinct reports after which a post is hidden.
    pub report_threshold: u64,
}

impl AppState {
    pub fn new(db: DatabaseConnection, file_store: LocalFileStore, report_threshold: u64) -> Self {
        Self {
            db,
            file_store,
            report_threshold,
        }
    }
}
