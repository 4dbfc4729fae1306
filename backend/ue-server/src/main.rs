use ue_enrich::{EnrichmentClient, EnrichmentSources};
use ue_server::error::Result as ServerResult;
use ue_server::{AppState, build_router, logger};

use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerResult<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = ue_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ue-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database pool + migrations
    let database_path = config.database_path()?;
    let pool = ue_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database ready");

    // Enrichment sources
    let enricher = EnrichmentClient::new(
        EnrichmentSources {
            age_url: config.enrichment.age_url.clone(),
            gender_url: config.enrichment.gender_url.clone(),
            country_url: config.enrichment.country_url.clone(),
        },
        config.enrichment.timeout(),
    )?;

    let app_state = AppState::new(pool.clone(), Arc::new(enricher), config.handler.timeout());
    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual bound address (port 0 is auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            // Without a signal handler, run until killed
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
