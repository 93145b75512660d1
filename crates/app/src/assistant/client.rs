//! Generative client boundary.

use async_trait::async_trait;
use mockall::automock;

use crate::assistant::AssistantError;

/// Speaker of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

/// One message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// A text generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRequest {
    /// Standing instructions for the model.
    pub system: Option<String>,

    /// Earlier turns, oldest first.
    pub history: Vec<ChatTurn>,

    /// The new user message.
    pub prompt: String,
}

impl TextRequest {
    pub fn prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }
}

#[automock]
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Generate free text.
    async fn generate_text(&self, request: TextRequest) -> Result<String, AssistantError>;

    /// Generate spoken audio for `text`, returned base64-encoded.
    async fn generate_speech(&self, text: &str) -> Result<String, AssistantError>;
}
