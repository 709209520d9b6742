use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's Sqlite pool.
///
/// The session table is created on first start. Sessions expire after seven days
/// of inactivity.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Makes sure the upload root exists before serving requests.
pub async fn prepare_upload_dir(config: &Config) -> Result<(), AppError> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;
    Ok(())
}
