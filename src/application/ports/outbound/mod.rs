//! Outbound ports - Interfaces that the application requires from external systems

mod content_port;
mod llm_port;

pub use content_port::ContentRepositoryPort;
pub use llm_port::{ChatMessage, LlmPort, LlmRequest, LlmResponse, MessageRole};
