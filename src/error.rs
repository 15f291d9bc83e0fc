//! Application error types

use serde::Serialize;
use thiserror::Error;

/// Application-wide error type
///
/// User-facing messages stay in Portuguese, matching the wire-level
/// taxonomy the client and server binaries report.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro ao criar requisição: {0}")]
    Request(String),

    #[error("Erro ao fazer requisição: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Erro ao converter resposta: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Erro ao salvar cotação: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Tempo limite excedido: {0}")]
    Timeout(String),

    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro interno: {0}")]
    Internal(String),
}

/// Serializable error body returned by the HTTP API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let code = match err {
            AppError::Request(_) => "REQUEST_ERROR",
            AppError::Http(_) => "HTTP_ERROR",
            AppError::Decode(_) => "DECODE_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Timeout(_) => "TIMEOUT",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        };

        ErrorResponse {
            code: code.to_string(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_codes() {
        let err = AppError::Timeout("contexto da persistência".to_string());
        let resp = ErrorResponse::from(&err);
        assert_eq!(resp.code, "TIMEOUT");
        assert!(resp.message.starts_with("Tempo limite excedido"));
    }

    #[test]
    fn test_database_error_message_is_portuguese() {
        let err = AppError::from(rusqlite::Error::InvalidQuery);
        assert!(err.to_string().starts_with("Erro ao salvar cotação"));
    }
}
