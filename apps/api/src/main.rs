mod catalog;
mod config;
mod conversion;
mod errors;
mod extraction;
mod models;
mod preview;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::TemplateCatalog;
use crate::config::Config;
use crate::conversion::ResumeConverter;
use crate::extraction::ResumeExtractor;
use crate::preview::session::PreviewSessions;
use crate::preview::{PreviewConfig, SitePipeline};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    let converter = ResumeConverter::default();

    let (preview, preview_task) = preview::spawn(
        PreviewConfig {
            capacity: config.preview_cache_capacity,
            queue_depth: config.preview_queue_depth,
        },
        Arc::new(SitePipeline::new(converter.clone())),
    );
    info!(
        "Preview service: capacity {}, timeout {}s",
        config.preview_cache_capacity,
        config.preview_timeout.as_secs()
    );

    let catalog = Arc::new(TemplateCatalog::builtin());
    info!("Template catalog loaded ({} templates)", catalog.list().len());

    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(ResumeExtractor::default()),
        converter,
        preview: preview.clone(),
        sessions: Arc::new(PreviewSessions::new(preview.clone())),
        catalog,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(e) = preview.shutdown().await {
        warn!("Preview service already stopped: {e}");
    }
    preview_task.await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received");
}
