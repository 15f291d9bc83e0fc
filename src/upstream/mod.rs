//! Upstream exchange-rate providers

mod awesome_api;

pub use awesome_api::AwesomeApiClient;

use crate::error::Result;
use async_trait::async_trait;

/// Source of the current USD/BRL rate
///
/// The server only needs the bid price; the seam exists so tests can stand in
/// a mock upstream.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch the current USD/BRL bid price
    async fn fetch_usd_brl_bid(&self) -> Result<f64>;
}
