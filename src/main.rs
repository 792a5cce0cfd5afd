//! Virma International website
//!
//! Serves the marketing pages and the chat widget's conversation
//! responder. All chat state is in memory and dies with the process.

mod api;
mod chat;
mod config;
mod inquiry;
mod runtime;
mod site;
mod state_machine;

use api::{create_router, AppState};
use config::SiteConfig;
use inquiry::{AcknowledgeOnly, LoggingSink};
use runtime::SessionManager;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "virma_site=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = SiteConfig::from_env();
    tracing::info!(
        max_sessions = config.max_sessions,
        session_idle_minutes = config.session_idle_minutes,
        assets_dir = %config.assets_dir.display(),
        "Configuration loaded"
    );

    let sessions = SessionManager::new(config.max_sessions, config.session_idle_timeout());
    let inquiries = Arc::new(LoggingSink::new(Arc::new(AcknowledgeOnly)));
    let state = AppState::new(sessions, inquiries, config.assets_dir.clone());

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new().gzip(true).br(true);

    let app = create_router(state)
        .layer(cors)
        .layer(compression)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Virma site listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
