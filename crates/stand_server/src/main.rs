//! stand_server: read-only REST server for forestry stands.
//!
//! Settings come from `.env` and the environment; see `stand_server::config`.

use std::sync::Arc;

use anyhow::Context;
use stand_core::StandService;
use stand_postgres::PgStandStore;
use stand_server::config::Settings;
use stand_server::router::build_router;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,stand_server=debug,tower_http=debug".into()),
        )
        .init();

    let settings = Settings::load().context("invalid settings")?;

    let pool = settings
        .pool_config()
        .connect()
        .await
        .context("failed to connect to database")?;

    tracing::info!("Connected to database");

    let service = Arc::new(StandService::new(Arc::new(PgStandStore::new(pool))));
    let app = build_router(service);

    let listener = TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", settings.bind_addr))?;
    tracing::info!("stand_server listening on {}", settings.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
