//! Ghost chat transcript entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Ghost,
}

/// A single entry in a Ghost chat transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GhostMessage {
    pub role: Speaker,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl GhostMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    pub fn ghost(text: impl Into<String>) -> Self {
        Self::new(Speaker::Ghost, text)
    }

    fn new(role: Speaker, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}
