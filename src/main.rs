mod api;
mod config;
mod error;
mod lifecycle;

use std::net::SocketAddr;
use std::sync::Arc;

use error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use lifecycle::{HttpStatusReporter, LogStatusReporter, StatusReporter};
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env();

    tracing::info!(
        "Loaded configuration: version {} stage {}",
        config.app_version,
        config.stage
    );
    if let Some(url) = &config.endpoint_url {
        tracing::info!("Post-traffic hook will probe {}", url);
    }

    let http = reqwest::Client::new();

    let reporter: Arc<dyn StatusReporter> = match &config.orchestrator_url {
        Some(url) => Arc::new(HttpStatusReporter::new(http.clone(), url.clone())),
        None => Arc::new(LogStatusReporter),
    };

    let state = Arc::new(api::AppState {
        config: config.clone(),
        http,
        reporter,
    });

    // Graceful shutdown channel
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    let app = api::create_router(state);

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Deploy hooks service starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET  /ping                - Health check");
    tracing::info!("  - POST /hooks/pre-traffic   - Pre-traffic validation");
    tracing::info!("  - POST /hooks/post-traffic  - Post-traffic validation");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

fn setup_tracing() {
    // RUST_LOG controls the filter; default to "info" when unset
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
