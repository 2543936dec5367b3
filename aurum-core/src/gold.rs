//! Client for the gold price aggregation API
//!
//! One fixed endpoint serves three intents, selected by query parameters
//! rather than separate paths: a current quote (`type=...`), an intraday
//! chart series (`action=chart&type=...`), and a viewer-count heartbeat
//! (`action=heartbeat`). Every response arrives in the same `{code, msg,
//! data}` envelope, which is handed to the caller uninterpreted.

use crate::config::Config;
use crate::error::Result;
use crate::http::get_gold_client;
use crate::models::{ApiResponse, ChartDataPoint, GoldPriceData, HeartbeatData};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Stateless client for the gold price API
#[derive(Debug, Clone)]
pub struct GoldClient {
    base_url: String,
}

impl GoldClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.gold_api_url.clone())
    }

    /// Fetch the current quote for an instrument, e.g. `XAU`.
    pub async fn price(&self, symbol: &str) -> Result<ApiResponse<GoldPriceData>> {
        debug!(%symbol, "fetching current price");
        self.get(&[("type", symbol)]).await
    }

    /// Fetch the intraday price series for an instrument.
    ///
    /// Points are returned in the order the server sent them, which is
    /// ascending by timestamp.
    pub async fn chart(&self, symbol: &str) -> Result<ApiResponse<Vec<ChartDataPoint>>> {
        debug!(%symbol, "fetching chart series");
        self.get(&[("action", "chart"), ("type", symbol)]).await
    }

    /// Report presence and fetch the current viewer count.
    ///
    /// Each call is an independent request; concurrent heartbeats are not
    /// deduplicated.
    pub async fn heartbeat(&self) -> Result<ApiResponse<HeartbeatData>> {
        debug!("sending heartbeat");
        self.get(&[("action", "heartbeat")]).await
    }

    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<ApiResponse<T>> {
        let response = get_gold_client()
            .get(&self.base_url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
