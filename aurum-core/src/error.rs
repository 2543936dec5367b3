//! Error types shared by both API clients.

use thiserror::Error;

/// Failure of a single client operation.
///
/// Nothing is retried or suppressed internally; every call resolves exactly
/// once with either a fully parsed result or one of these variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection, DNS, timeout, or body-read failure. The gold client also
    /// maps a non-2xx HTTP status here.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body arrived but could not be decoded as the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Structurally valid JSON that is missing required content.
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),

    /// The chat proxy answered with an explicit `error` message. The text is
    /// the server's own reason and is suitable for user-facing display.
    #[error("API error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, Error>;
