use anyhow::Result;
use salon::config::Config;
use salon::server::{AppState, build_router, serve};
use salon::storage::SalonStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();
    let store = SalonStore::connect(&config.database_url).await?;
    tracing::info!(database = %config.database_url, "store ready");

    let app = build_router(AppState { store });
    serve(app, config.port).await
}
