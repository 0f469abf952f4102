//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: Application configuration
//! - Content: The portfolio catalog, built in or loaded from JSON
//! - Gemini: Hosted LLM integration for Ghost replies
//! - HTTP: Pages and JSON API routes
//! - State: Shared application state

pub mod config;
pub mod content;
pub mod gemini;
pub mod http;
pub mod state;
