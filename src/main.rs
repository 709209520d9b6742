mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, startup, state::AppState, storage::LocalFileStore,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    startup::prepare_upload_dir(&config).await?;

    let state = AppState::new(
        db,
        LocalFileStore::new(config.upload_dir.clone()),
        config.report_threshold,
    );

    let app = server::router::router()
        .with_state(state)
        .layer(session)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
