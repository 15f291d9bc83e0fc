//! cotacao-server: serves GET /cotacao on localhost:8080

use anyhow::Result;
use cotacao::config::ServerConfig;
use cotacao::db::QuoteDb;
use cotacao::server::QuoteServer;
use cotacao::state::AppState;
use cotacao::upstream::AwesomeApiClient;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    cotacao::init_tracing();

    let config = ServerConfig::default();

    let db = Arc::new(QuoteDb::new(&config.db_path)?);
    let provider = Arc::new(AwesomeApiClient::new(
        &config.upstream_base_url,
        config.upstream_timeout,
    )?);

    let state = Arc::new(AppState::new(db, provider, config));

    let mut server = QuoteServer::new();
    let addr = server.start(state).await?;
    info!("Quote server listening on http://{}/cotacao", addr);

    tokio::signal::ctrl_c().await?;
    server.stop();

    Ok(())
}
