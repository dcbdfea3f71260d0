//! HTTP server for the address book.
//!
//! Wires the contact store into an axum router and serves it until Ctrl-C.

pub mod content_type;
pub mod handlers;
pub mod paths;

pub use handlers::AppState;

use crate::repositories::ContactRepository;
use anyhow::Result;
use axum::routing::any;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the router serving every contact route against `store`.
///
/// The store is injected rather than created here so every handler shares
/// the same instance.
pub fn router(store: Arc<dyn ContactRepository>) -> Router {
    Router::new()
        .route(paths::COLLECTION_PATH, any(handlers::contact_collection))
        .fallback(handlers::prefixed_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(store))
}

/// Bind `addr` and serve the router until the process receives Ctrl-C.
///
/// # Returns
/// An error if the listener cannot be bound or the server fails
pub async fn run_server(addr: SocketAddr, store: Arc<dyn ContactRepository>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        // Without a signal handler, keep serving until killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
