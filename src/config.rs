//! Fixed configuration for both binaries
//!
//! There is deliberately no CLI or environment surface: the relay runs with
//! fixed addresses, URLs and timeouts. Values live here so they are passed
//! explicitly into constructors instead of being read from globals.

use std::path::PathBuf;
use std::time::Duration;

/// Upstream exchange-rate provider base URL
pub const AWESOME_API_BASE_URL: &str = "https://economia.awesomeapi.com.br";

/// Quote server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the upstream rate provider
    pub upstream_base_url: String,
    /// Deadline for the outbound rate fetch
    pub upstream_timeout: Duration,
    /// Deadline for the persistence write
    pub persist_timeout: Duration,
    /// SQLite database file
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            upstream_base_url: AWESOME_API_BASE_URL.to_string(),
            upstream_timeout: Duration::from_millis(200),
            persist_timeout: Duration::from_millis(10),
            db_path: PathBuf::from("desafio.db"),
        }
    }
}

impl ServerConfig {
    /// Socket address string for binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Quote client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL of the quote server endpoint
    pub server_url: String,
    /// Deadline for the whole request
    pub request_timeout: Duration,
    /// Output file, truncated on each run
    pub output_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080/cotacao".to_string(),
            request_timeout: Duration::from_millis(300),
            output_path: PathBuf::from("cotacao.txt"),
        }
    }
}
