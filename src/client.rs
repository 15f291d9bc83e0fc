//! Quote client
//!
//! Performs a single GET against the quote server, prints the value and
//! writes it to a local file. Every failure is terminal: the caller aborts
//! the process without writing anything.

use crate::config::ClientConfig;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use tracing::info;

/// The server's response body; only `valor` is decoded
#[derive(Debug, Deserialize)]
pub struct CotacaoValor {
    pub valor: f64,
}

/// Fetch the current quote from the server, bounded by the configured timeout
pub async fn fetch_cotacao(config: &ClientConfig) -> Result<f64> {
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;

    let data: CotacaoValor = client
        .get(&config.server_url)
        .send()
        .await?
        .json()
        .await?;

    Ok(data.valor)
}

/// Write the quote to the output file, truncating any prior content
pub fn write_output(config: &ClientConfig, valor: f64) -> Result<()> {
    fs::write(&config.output_path, format!("Dólar: {:.6}", valor))?;
    Ok(())
}

/// Fetch, print and record the quote
pub async fn run(config: &ClientConfig) -> Result<f64> {
    let valor = fetch_cotacao(config).await?;

    println!("Cotação do dólar para real: {}", valor);
    write_output(config, valor)?;
    info!("Cotacao {} gravada em {}", valor, config.output_path.display());

    Ok(valor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(server_url: String, dir: &std::path::Path) -> ClientConfig {
        ClientConfig {
            server_url,
            request_timeout: Duration::from_millis(300),
            output_path: dir.join("cotacao.txt"),
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_run_writes_formatted_file() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cotacao"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"valor": 5.25}"#))
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(format!("{}/cotacao", mock_server.uri()), dir.path());

        let valor = run(&config).await.unwrap();
        assert_eq!(valor, 5.25);

        let contents = fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(contents, "Dólar: 5.250000");
    }

    #[test_log::test(tokio::test)]
    async fn test_run_truncates_previous_content() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cotacao"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"valor": 4.9}"#))
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(format!("{}/cotacao", mock_server.uri()), dir.path());
        fs::write(&config.output_path, "conteúdo antigo muito mais longo que o novo").unwrap();

        run(&config).await.unwrap();

        let contents = fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(contents, "Dólar: 4.900000");
    }

    #[test_log::test(tokio::test)]
    async fn test_run_aborts_without_file_when_server_unreachable() {
        // Bind and drop to get a port with nothing listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(format!("http://127.0.0.1:{}/cotacao", port), dir.path());

        let result = run(&config).await;
        assert!(matches!(result, Err(AppError::Http(_))));
        assert!(!config.output_path.exists());
    }

    #[test_log::test(tokio::test)]
    async fn test_run_aborts_when_server_exceeds_deadline() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cotacao"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"valor": 5.25}"#)
                    .set_delay(Duration::from_millis(600)),
            )
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(format!("{}/cotacao", mock_server.uri()), dir.path());

        let result = run(&config).await;
        assert!(result.is_err());
        assert!(!config.output_path.exists());
    }
}
