//! Cotacao - USD/BRL quote relay
//!
//! Two independent processes: a server that fetches the current USD/BRL rate
//! from AwesomeAPI on each request and appends it to a local SQLite log, and
//! a client that asks the server once and records the value to a file.

pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod state;
pub mod upstream;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging for a binary
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cotacao=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
