//! Application layer - Use cases over the portfolio domain
//!
//! This layer contains:
//! - Ports: LLM and content repository interfaces
//! - Services: Content queries, the Ghost text bridge, Ghost chat sessions
//! - DTOs: Serializable shapes for the HTTP boundary

pub mod dto;
pub mod ports;
pub mod services;
