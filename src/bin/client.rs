//! cotacao-client: fetches the quote once and records it to cotacao.txt

use anyhow::Result;
use cotacao::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    cotacao::init_tracing();

    let config = ClientConfig::default();
    cotacao::client::run(&config).await?;

    Ok(())
}
