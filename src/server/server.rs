//! HTTP server for the quote endpoint

use crate::error::{AppError, Result};
use crate::server::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Build the application router
///
/// Method routing yields 405 for non-GET on a known path; the fallback yields
/// 404 for everything else.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/cotacao", get(handlers::get_cotacao))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Quote server manager
pub struct QuoteServer {
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl Default for QuoteServer {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteServer {
    /// Create a new server
    pub fn new() -> Self {
        Self { shutdown_tx: None }
    }

    /// Bind and start serving in a background task
    ///
    /// Returns the bound address (useful when the configured port is 0).
    pub async fn start(&mut self, state: Arc<AppState>) -> Result<SocketAddr> {
        let addr: SocketAddr = state
            .config
            .addr()
            .parse()
            .map_err(|e| AppError::Internal(format!("Endereço inválido: {}", e)))?;

        let app = build_router(state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        self.shutdown_tx = Some(shutdown_tx);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;

        info!("Starting quote server on {}", local_addr);

        tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Quote server shutting down");
            });

            if let Err(e) = server.await {
                error!("Quote server error: {}", e);
            }
        });

        Ok(local_addr)
    }

    /// Signal the server to shut down
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
