// Main entry point - Composition root and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard::Dashboard;
use crate::application::router::PageRouter;
use crate::application::sampler::Sampler;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::system_sources::{SystemClock, ThreadRandom};
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, live_session, page_layout, shell_page};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_dashboard_config()?;

    // Initialize tracing, RUST_LOG wins over the configured debug flag
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Sampler capabilities (infrastructure layer)
    let sampler = Sampler::new(Arc::new(SystemClock), Arc::new(ThreadRandom));

    // Composition root (application layer)
    let dashboard = Dashboard::new(PageRouter::new(config.refresh.interval_ms), sampler);
    let state = Arc::new(AppState { dashboard });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/_dash/layout", get(page_layout))
        .route("/_dash/session", get(live_session))
        .fallback(shell_page)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server.bind_addr();
    tracing::info!(
        "Starting live dashboard on {} (refresh every {:?})",
        addr,
        config.refresh.period()
    );

    axum::serve(tokio::net::TcpListener::bind(&addr).await?, router).await?;

    Ok(())
}
