use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// In-memory SQLite database and session for one test, both created on first use.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    /// Stored in the same in-memory database as `db`.
    pub session: Option<Session>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => Ok(&*self.db.insert(Database::connect("sqlite::memory:").await?)),
        }
    }

    /// Runs the given CREATE TABLE statements in order. Used by `TestBuilder::build`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Session backed by the test database; the session table is created on first call.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let pool = self.database().await?.get_sqlite_connection_pool().clone();
            let store = SqliteStore::new(pool);
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        match self.session.as_ref() {
            Some(session) => Ok(session),
            None => Err(sea_orm::DbErr::Custom("session not initialized".to_string()).into()),
        }
    }

    /// Both handles at once, for tests that need the database and a session together.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }
}
