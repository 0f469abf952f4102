//! Ghost Service - The text-response bridge behind the chat widget
//!
//! Forwards one user message to the hosted model with the Ghost persona and
//! returns its text. Every failure degrades to a fixed reply; callers always
//! get a string back.

use std::sync::Arc;

use tracing::{debug, error, instrument, warn};

use crate::application::ports::outbound::{ChatMessage, LlmPort, LlmRequest};

/// Persona instruction sent with every request
pub const GHOST_PERSONA: &str = "You are the 'Digital Ghost' of a funky, creative software engineer. \
Your personality is eccentric, helpful, and highly tech-savvy. You love retro games, neon colors, \
and building cool stuff. Keep responses concise (under 3 sentences) and use a bit of gamer slang \
like 'pog', 'glitch', or 'buff'.";

/// Sampling temperature for Ghost replies
pub const GHOST_TEMPERATURE: f32 = 0.9;

/// First message of every chat session
pub const GHOST_GREETING: &str = "HELLO. I AM THE RESIDENT ARCHIVIST. HOW CAN I HELP?";

/// Reply when no API key is configured
pub const OFFLINE_REPLY: &str = "The Ghost is offline right now. No API key, no séance.";

/// Reply when the model returns no text
pub const EMPTY_REPLY: &str = "The digital mist is too thick right now. Try again, human!";

/// Reply when the request fails for any reason
pub const GLITCH_REPLY: &str = "The connection to the Oracle is glitching... Check your settings!";

/// Service answering chat messages as the Ghost
pub struct GhostService<L: LlmPort> {
    llm: Arc<L>,
}

impl<L: LlmPort> GhostService<L> {
    pub fn new(llm: Arc<L>) -> Self {
        Self { llm }
    }

    /// Whether replies come from the model rather than the offline fallback
    pub fn is_online(&self) -> bool {
        self.llm.is_configured()
    }

    /// Answer a user message
    ///
    /// Makes at most one model request. Never fails: a missing key, an
    /// empty answer and a failed request each map to a fixed reply.
    #[instrument(skip(self, user_text), fields(chars = user_text.len()))]
    pub async fn respond(&self, user_text: &str) -> String {
        if !self.llm.is_configured() {
            warn!("Ghost has no API key configured, replying offline");
            return OFFLINE_REPLY.to_string();
        }

        let request = LlmRequest::new(vec![ChatMessage::user(user_text)])
            .with_system_prompt(GHOST_PERSONA)
            .with_temperature(GHOST_TEMPERATURE);

        match self.llm.generate(request).await {
            Ok(response) => match response.content.filter(|text| !text.is_empty()) {
                Some(text) => {
                    debug!(reply_chars = text.len(), "Ghost replied");
                    text
                }
                None => {
                    debug!(finish_reason = ?response.finish_reason, "Ghost returned no text");
                    EMPTY_REPLY.to_string()
                }
            },
            Err(e) => {
                error!("Gemini error: {}", e);
                GLITCH_REPLY.to_string()
            }
        }
    }
}
