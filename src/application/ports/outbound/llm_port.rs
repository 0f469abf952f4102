//! LLM port - What the application needs from a hosted text-generation model

use async_trait::async_trait;

/// Role of a message sent to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
}

/// One turn of model input
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// A generation request
#[derive(Debug, Clone, PartialEq)]
pub struct LlmRequest {
    pub messages: Vec<ChatMessage>,
    pub system_prompt: Option<String>,
    pub temperature: Option<f32>,
}

impl LlmRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            system_prompt: None,
            temperature: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// A generation result
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LlmResponse {
    /// Generated text; `None` when the model returned no text parts
    pub content: Option<String>,
    pub finish_reason: Option<String>,
}

/// Port for hosted text-generation models
#[async_trait]
pub trait LlmPort: Send + Sync {
    type Error: std::fmt::Display + Send + Sync;

    /// Whether credentials are present. Unconfigured clients must not be
    /// asked to generate.
    fn is_configured(&self) -> bool {
        true
    }

    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, Self::Error>;
}
