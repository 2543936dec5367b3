use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// One turn of the conversation history sent to the chat proxy
///
/// The sequence order is meaningful: messages are chronological turns and
/// are forwarded to the proxy exactly as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// Envelope wrapping every gold price API response
///
/// `code` and `msg` carry the remote service's own success semantics. The
/// client delivers them untouched; branching on them is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: String,
    pub data: T,
}

/// Snapshot of one gold quote at request time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldPriceData {
    pub source: String,
    pub name: String,
    pub symbol: String,
    pub currency: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_close: Option<f64>,
    pub change: f64,
    pub change_pct: f64,
    pub update_time: String,
}

/// One point of a time-ordered price series
///
/// Field names match the wire format, which keeps them short to reduce
/// payload size for intraday series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    /// Unix timestamp
    pub t: i64,
    /// Price at that timestamp
    pub p: f64,
}

/// Current viewer count reported by the heartbeat endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartbeatData {
    pub count: u64,
}
