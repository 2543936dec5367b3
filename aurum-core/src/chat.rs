//! Client for the AI chat proxy
//!
//! The proxy forwards conversation history to an upstream language model
//! provider and answers with an OpenAI-style completion envelope. Only the
//! first choice's text is surfaced to callers; there is no streaming and no
//! partial output.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::http::get_client;
use crate::models::ChatMessage;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Request payload for the chat proxy
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: &'a [ChatMessage],
}

/// Response from the chat proxy
///
/// On success the proxy omits `error` and fills `choices`; on failure it
/// sends `error` with its own reason and no usable choices.
#[derive(Debug, Deserialize)]
struct ChatEnvelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Stateless client for the chat proxy endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    endpoint: String,
}

impl ChatClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.chat_url.clone())
    }

    /// Send the conversation history and return the assistant's reply text.
    ///
    /// Messages are forwarded in the order given; the caller is expected to
    /// supply at least one. No validation of roles or content happens here,
    /// the remote service is the authority on both.
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String> {
        debug!(count = messages.len(), "sending chat request");

        let response = get_client()
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&ChatRequest { messages })
            .send()
            .await?;

        // The proxy reports failures through the `error` field, so the body
        // is parsed regardless of HTTP status.
        let body = response.text().await?;
        let envelope: ChatEnvelope = serde_json::from_str(&body)?;

        // An empty error string means no error, same as an absent field.
        if let Some(message) = envelope.error.filter(|m| !m.is_empty()) {
            return Err(Error::Api(message));
        }

        envelope
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(Error::Shape("chat response has no choices"))
    }
}
