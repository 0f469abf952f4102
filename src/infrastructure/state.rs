//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::outbound::ContentRepositoryPort;
use crate::application::services::{ChatSessionService, ContentService, GhostService};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::content::StaticContentRepository;
use crate::infrastructure::gemini::GeminiClient;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    // Application services
    pub content_service: ContentService,
    pub ghost_service: Arc<GhostService<GeminiClient>>,
    pub chat_sessions: ChatSessionService<GeminiClient>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        // Content is read once and never changes afterwards
        let repository: Arc<dyn ContentRepositoryPort> = match &config.content_path {
            Some(path) => Arc::new(
                StaticContentRepository::from_json_file(path)
                    .with_context(|| format!("Failed to load content from {}", path.display()))?,
            ),
            None => {
                info!("Using built-in portfolio content");
                Arc::new(StaticContentRepository::builtin())
            }
        };
        let content_service = ContentService::new(repository);

        // Initialize Gemini client
        let gemini = GeminiClient::new(
            &config.gemini_base_url,
            &config.gemini_model,
            config.gemini_api_key.clone(),
            config.gemini_timeout,
        )
        .context("Failed to build Gemini HTTP client")?;

        let ghost_service = Arc::new(GhostService::new(Arc::new(gemini)));
        let chat_sessions =
            ChatSessionService::new(Arc::clone(&ghost_service), config.ghost_session_idle);

        Ok(Self {
            config,
            content_service,
            ghost_service,
            chat_sessions,
        })
    }
}
