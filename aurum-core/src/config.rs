/// Production chat proxy endpoint used when AURUM_CHAT_URL is not set
pub const DEFAULT_CHAT_URL: &str = "https://ai-proxy.lz-t.top/api/ai-chat";

/// Production gold price API endpoint used when AURUM_GOLD_API_URL is not set
pub const DEFAULT_GOLD_API_URL: &str = "https://jin.20021002.xyz/api.php";

/// Application configuration from environment
///
/// Both URLs are fixed for the lifetime of the process. Tests construct the
/// clients from mock server URLs directly instead of going through here.
#[derive(Debug, Clone)]
pub struct Config {
    pub chat_url: String,
    pub gold_api_url: String,
}

impl Config {
    /// Load configuration from .env file and environment
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Not an error if .env is missing

        let chat_url =
            std::env::var("AURUM_CHAT_URL").unwrap_or_else(|_| DEFAULT_CHAT_URL.to_string());

        let gold_api_url = std::env::var("AURUM_GOLD_API_URL")
            .unwrap_or_else(|_| DEFAULT_GOLD_API_URL.to_string());

        Self {
            chat_url,
            gold_api_url,
        }
    }
}
