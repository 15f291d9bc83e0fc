//! Quote server endpoint handlers

use crate::error::{AppError, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Map a failure to a single 500 response
///
/// Every error path returns through here immediately; a failed request writes
/// exactly one status.
fn internal_error(err: AppError) -> Response {
    error!("{}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::from(&err)),
    )
        .into_response()
}

/// Quote endpoint - GET /cotacao
///
/// Fetches the current USD/BRL bid upstream, appends one row to the store and
/// replies with the stored record. If the caller disconnects first, the
/// runtime drops this future; the entry log line is the trace it leaves.
pub async fn get_cotacao(State(state): State<Arc<AppState>>) -> Response {
    info!("GET /cotacao");

    let bid = match state.provider.fetch_usd_brl_bid().await {
        Ok(bid) => bid,
        Err(e) => return internal_error(e),
    };

    // rusqlite is synchronous; the deadline bounds the await, not the insert
    // itself. A write that outlives it finishes in the background while the
    // request fails.
    let db = state.db.clone();
    let persist = tokio::task::spawn_blocking(move || db.insert_cotacao(bid));

    let cotacao = match tokio::time::timeout(state.config.persist_timeout, persist).await {
        Ok(Ok(Ok(cotacao))) => cotacao,
        Ok(Ok(Err(e))) => return internal_error(e),
        Ok(Err(e)) => return internal_error(AppError::Internal(e.to_string())),
        Err(_) => {
            return internal_error(AppError::Timeout(
                "persistência da cotação".to_string(),
            ))
        }
    };

    info!("Stored cotacao id={} valor={}", cotacao.id, cotacao.valor);
    (StatusCode::OK, Json(cotacao)).into_response()
}

/// Health check endpoint - GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Fallback for unknown paths - 404
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    warn!("No route for {}", uri);
    StatusCode::NOT_FOUND
}
