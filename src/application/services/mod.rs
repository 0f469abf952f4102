//! Application services - Use case implementations
//!
//! Each service accepts its port dependencies at construction and returns
//! domain values or view models.

pub mod chat_session_service;
pub mod content_service;
pub mod delayed_hide;
pub mod ghost_service;

pub use chat_session_service::{ChatSessionError, ChatSessionService, ChatTranscript, SubmitOutcome};
pub use content_service::{index_label, ContentService};
pub use delayed_hide::{DelayedHide, HOVER_HIDE_DELAY};
pub use ghost_service::GhostService;
