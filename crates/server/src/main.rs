use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chartday_core::{
    load_config, validate_config, BillboardChartClient, ChartLookup, ChartProvider,
    ClientCredentials, CredentialProvider, MemoryTrackCache, SpotifyCatalogClient, TrackCache,
    TrackCatalog, TrackResolver,
};

use chartday_server::api::create_router;
use chartday_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("CHARTDAY_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Chart provider: {}", config.chart.effective_base_url());
    info!("Catalog: {}", config.catalog.effective_base_url());

    // Create chart client
    let chart: Arc<dyn ChartProvider> = Arc::new(
        BillboardChartClient::new(config.chart.clone())
            .context("Failed to create Billboard chart client")?,
    );

    // Create credential holder and catalog client
    let credentials: Arc<dyn CredentialProvider> = Arc::new(
        ClientCredentials::new(&config.catalog)
            .context("Failed to create catalog credential holder")?,
    );
    let catalog: Arc<dyn TrackCatalog> = Arc::new(
        SpotifyCatalogClient::new(&config.catalog, credentials)
            .context("Failed to create catalog client")?,
    );

    // Process-lifetime track cache
    let cache: Arc<dyn TrackCache> = Arc::new(MemoryTrackCache::new());

    let resolver = TrackResolver::new(cache, catalog);
    let lookup = Arc::new(ChartLookup::new(chart, resolver));

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), lookup));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down...");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
