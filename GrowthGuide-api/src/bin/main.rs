use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use growth_guide_api::api::create_app;
use growth_guide_api::api::handlers::health::create_health_service;
use growth_guide_api::config::AppConfig;
use growth_guide_data::reference::{load_bundled, load_from_path};
use growth_guide_data::InMemoryReferenceStore;
use growth_guide_domain::services::create_default_growth_service;

/// The main entry point for the GrowthGuide API server
///
/// This function:
/// 1. Initializes environment variables from .env file
/// 2. Sets up tracing for logging
/// 3. Loads the reference tables once
/// 4. Creates and starts the Axum web application
/// 5. Handles graceful shutdown
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    if dotenv().is_err() {
        eprintln!("Warning: .env file not found or couldn't be read. Using environment variables.");
    }

    // Initialize tracing for structured logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(false)
            .with_ansi(true)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stdout))
        .with(env_filter)
        .init();

    info!("Starting GrowthGuide API server");

    let config = AppConfig::from_env().context("Failed to read configuration")?;

    let store = load_reference_store(&config).map_err(|e| {
        error!("Failed to load reference data: {:#}", e);
        e
    })?;
    info!("Loaded {} reference rows", store.row_count());

    let store = Arc::new(store);
    let growth_service = create_default_growth_service(store.clone());
    let health_service = create_health_service(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = create_app(growth_service, health_service, Arc::new(config));

    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    // Serve the application with graceful shutdown support
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

fn load_reference_store(config: &AppConfig) -> anyhow::Result<InMemoryReferenceStore> {
    match &config.reference_data_path {
        Some(path) => {
            info!("Loading reference data from {}", path.display());
            load_from_path(path)
                .with_context(|| format!("Failed to load reference data from {}", path.display()))
        }
        None => {
            info!("Loading bundled reference data");
            load_bundled().context("Failed to load bundled reference data")
        }
    }
}

/// Waits for CTRL+C or SIGTERM (on Unix systems), then returns to trigger
/// the graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down server...");
}
