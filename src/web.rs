use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{Router, http::StatusCode, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::config::AetherisConfig;
use crate::session_store::{InMemorySessionStore, SessionStore};

/// Build the full router around `state`
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .route("/health", get(api::health))
        .nest("/api", api::router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(cors)
        .with_state(state)
}

pub async fn run(config: AetherisConfig) -> Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let idle = Duration::from_secs(config.server.session_idle_minutes * 60);
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    tokio::spawn(evict_idle_sessions(Arc::clone(&store), idle));
    let state = AppState::new(store, config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")?;

    tracing::info!("Web server stopped");
    Ok(())
}

/// Sweep idle sessions a few times per idle window
async fn evict_idle_sessions(store: Arc<dyn SessionStore>, idle: Duration) {
    let mut ticker = tokio::time::interval((idle / 4).max(Duration::from_secs(1)));
    loop {
        ticker.tick().await;
        if let Err(e) = store.evict_idle(idle).await {
            tracing::warn!("Idle session sweep failed: {}", e);
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
