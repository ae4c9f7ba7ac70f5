//! OpenAI chat-completion wire shapes for the voice channel.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inbound turn from the speech platform.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionRequest {
    #[serde(default)]
    pub model: Option<String>,
    pub messages: Vec<InboundMessage>,
    /// Pipe-delimited caller identity, see [`crate::session`].
    #[serde(default)]
    pub custom_session_id: Option<String>,
}

impl ChatCompletionRequest {
    /// The utterance to act on: content of the last user message.
    pub fn last_user_utterance(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundMessage {
    pub role: String,
    #[serde(default)]
    pub content: String,
}

/// Outbound reply: one assistant message, `finish_reason: "stop"`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: &'static str,
    pub created: i64,
    pub model: String,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    pub index: u32,
    pub message: OutboundMessage,
    pub finish_reason: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutboundMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatCompletionResponse {
    /// Wrap reply text in the completion envelope.
    pub fn assistant(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: format!("chatcmpl-{}", Uuid::new_v4().simple()),
            object: "chat.completion",
            created: chrono::Utc::now().timestamp(),
            model: model.into(),
            choices: vec![Choice {
                index: 0,
                message: OutboundMessage {
                    role: "assistant",
                    content: content.into(),
                },
                finish_reason: "stop",
            }],
        }
    }
}
