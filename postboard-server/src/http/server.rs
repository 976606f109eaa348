//! Axum server setup
//!
//! Server skeleton with:
//! - Configurable CORS (any origin by default)
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use axum::Router;
use postboard_core::PostStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::{ConfigError, ServerConfig};
use crate::state::AppState;

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Address did not resolve, or the port could not be taken
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Build the application router with all routes
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::posts::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
///
/// The store starts with the two seed posts and lives for the life of the
/// process.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let cors = config.cors_layer()?;
    if config.cors_origins.is_empty() {
        tracing::info!("CORS: all origins allowed");
    } else {
        tracing::info!(origins = ?config.cors_origins, "CORS: restricted origins");
    }

    let store = PostStore::seeded();
    tracing::info!(posts = store.len(), next_id = store.next_id(), "store initialized");

    let app = build_router(AppState::new(store), cors);

    // Bind listener; (host, port) lets hostnames like "localhost" resolve
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.socket_addr(),
            source,
        })?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
