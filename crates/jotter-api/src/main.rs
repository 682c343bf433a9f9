//! jotter-api - HTTP API server for jotter

use std::net::SocketAddr;

use jotter_api::{router, telemetry, AppState, ServerConfig, StoreKind};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    let _file_guard = telemetry::init_tracing(&config.log);

    info!(
        log_format = ?config.log.format,
        log_file = config.log.file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );

    match &config.store {
        StoreKind::Memory => info!("Using in-memory note store"),
        StoreKind::File(path) => info!(path = %path.display(), "Using file note store"),
    }
    let store = config.open_store().await?;
    let app = router(AppState::new(store), config.max_body_bytes);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
