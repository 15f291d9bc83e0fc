//! Application state shared by HTTP handlers

use crate::config::ServerConfig;
use crate::db::QuoteDb;
use crate::upstream::RateProvider;
use std::sync::Arc;

/// State passed into every request handler
///
/// The storage handle and the upstream provider are injected here instead of
/// living in process-wide globals.
pub struct AppState {
    /// Append-only quote store
    pub db: Arc<QuoteDb>,

    /// Upstream USD/BRL rate source
    pub provider: Arc<dyn RateProvider>,

    /// Fixed server configuration (timeouts, addresses)
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(db: Arc<QuoteDb>, provider: Arc<dyn RateProvider>, config: ServerConfig) -> Self {
        Self {
            db,
            provider,
            config,
        }
    }
}
