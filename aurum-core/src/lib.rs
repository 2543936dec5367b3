pub mod chat;
pub mod config;
pub mod error;
pub mod gold;
pub mod http;
pub mod models;

// Re-export commonly used types
pub use chat::ChatClient;
pub use config::Config;
pub use error::{Error, Result};
pub use gold::GoldClient;
pub use models::{ApiResponse, ChartDataPoint, ChatMessage, GoldPriceData, HeartbeatData, Role};
