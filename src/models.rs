// Wire types for the inbound moderation contracts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// REST request: `POST /moderate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationRequest {
    #[serde(default)]
    pub text: String,
}

/// REST response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationResponse {
    pub is_inappropriate: bool,
}

/// One item of a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ChatContent {
    Text { text: String },
    StartSession,
    EndSession,
}

/// Conversational message, inbound or outbound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub msg_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub content: Vec<ChatContent>,
}

impl ChatMessage {
    /// The first text item, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|item| match item {
            ChatContent::Text { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn starts_session(&self) -> bool {
        self.content.contains(&ChatContent::StartSession)
    }
}

/// Response to `POST /chat`: an acknowledgement plus the reply message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub acknowledged_msg_id: Uuid,
    pub message: ChatMessage,
}
