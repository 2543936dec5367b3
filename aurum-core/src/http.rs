//! Shared HTTP client utilities
//!
//! This module provides shared, lazily-initialized HTTP clients for all API
//! calls. Using a single client per remote service allows connection pooling
//! and avoids resource duplication.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Default HTTP timeout for chat proxy requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// The gold price API is expected to answer fast; calls fail after this
const GOLD_TIMEOUT_SECS: u64 = 10;

/// Global HTTP client for chat proxy calls (60s timeout)
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Global HTTP client for gold price API calls (10s timeout)
static GOLD_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client for chat proxy calls
///
/// The chat proxy forwards to an upstream language model provider, so
/// responses can take a while; this client uses a generous 60-second timeout.
pub fn get_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("aurum/0.1")
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}

/// Get or create the shared HTTP client for gold price API calls
///
/// Quote, chart, and heartbeat requests all go through this client and share
/// its uniform 10-second timeout.
pub fn get_gold_client() -> &'static Client {
    GOLD_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("aurum/0.1")
            .timeout(Duration::from_secs(GOLD_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}
