//! Application configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server port
    pub server_port: u16,

    /// Gemini API key; `None` keeps the Ghost offline
    pub gemini_api_key: Option<String>,
    /// Gemini REST base URL
    pub gemini_base_url: String,
    /// Model used for Ghost replies
    pub gemini_model: String,
    /// Upper bound for one Gemini request
    pub gemini_timeout: Duration,

    /// How long an untouched Ghost chat session survives
    pub ghost_session_idle: Duration,

    /// JSON catalog to serve instead of the built-in content
    pub content_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            gemini_api_key: None,
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            gemini_model: "gemini-3-flash-preview".to_string(),
            gemini_timeout: Duration::from_secs(30),
            ghost_session_idle: Duration::from_secs(900),
            content_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| defaults.server_port.to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            gemini_api_key: non_empty_var("GEMINI_API_KEY").or_else(|| non_empty_var("API_KEY")),
            gemini_base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_timeout: Duration::from_secs(
                env::var("GEMINI_TIMEOUT_SECS")
                    .unwrap_or_else(|_| defaults.gemini_timeout.as_secs().to_string())
                    .parse()
                    .context("GEMINI_TIMEOUT_SECS must be a whole number of seconds")?,
            ),

            ghost_session_idle: Duration::from_secs(
                env::var("GHOST_SESSION_IDLE_SECS")
                    .unwrap_or_else(|_| defaults.ghost_session_idle.as_secs().to_string())
                    .parse()
                    .context("GHOST_SESSION_IDLE_SECS must be a whole number of seconds")?,
            ),

            content_path: non_empty_var("PORTFOLIO_CONTENT_PATH").map(PathBuf::from),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
