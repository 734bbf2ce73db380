use std::sync::Arc;

use exercise_tracker::api::routes::create_routes;
use exercise_tracker::config::{run_migrations, AppConfig, DatabaseConfig, StorageBackend};
use exercise_tracker::store::{InMemoryStore, PgStore, SharedStore};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    // RUST_LOG wins over LOG_LEVEL when both are set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store: SharedStore = match config.storage {
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let pool = db_config.create_pool().await?;
            run_migrations(&pool).await?;
            info!(database = %db_config.name, "Connected to PostgreSQL");
            Arc::new(PgStore::new(pool))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage; data is lost on shutdown");
            Arc::new(InMemoryStore::new())
        }
    };

    let app = create_routes(store);

    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!(storage = %config.storage, "Exercise tracker listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
