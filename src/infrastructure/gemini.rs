//! Gemini client for Ghost replies

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{
    ChatMessage, LlmPort, LlmRequest, LlmResponse, MessageRole,
};

/// Client for the Gemini `generateContent` API
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Run one generation request
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            let message = serde_json::from_str::<ApiErrorEnvelope>(&error_text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(error_text);
            return Err(GeminiError::ApiError(format!("{}: {}", status, message)));
        }

        let body: GenerateContentResponse = response.json().await?;
        Ok(body)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("No Gemini API key configured")]
    MissingApiKey,
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn finish_reason(&self) -> Option<String> {
        self.candidates.first()?.finish_reason.clone()
    }
}

impl From<&ChatMessage> for Content {
    fn from(message: &ChatMessage) -> Self {
        let role = match message.role {
            MessageRole::User => "user",
        };
        Self {
            role: Some(role.to_string()),
            parts: vec![Part {
                text: Some(message.content.clone()),
            }],
        }
    }
}

impl From<&LlmRequest> for GenerateContentRequest {
    fn from(request: &LlmRequest) -> Self {
        Self {
            system_instruction: request.system_prompt.as_ref().map(|prompt| Content {
                role: None,
                parts: vec![Part {
                    text: Some(prompt.clone()),
                }],
            }),
            contents: request.messages.iter().map(Content::from).collect(),
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }
}

// =============================================================================
// LlmPort Implementation
// =============================================================================

#[async_trait]
impl LlmPort for GeminiClient {
    type Error = GeminiError;

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, Self::Error> {
        let body = GenerateContentRequest::from(&request);
        let response = self.generate_content(&body).await?;
        Ok(LlmResponse {
            content: response.text(),
            finish_reason: response.finish_reason(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: Option<&str>) -> GeminiClient {
        GeminiClient::new(
            "https://generativelanguage.googleapis.com/v1beta/",
            "gemini-3-flash-preview",
            api_key.map(str::to_string),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(
            client(None).endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_configured_only_with_key() {
        assert!(!client(None).is_configured());
        assert!(client(Some("secret")).is_configured());
    }

    #[test]
    fn test_request_body_shape() {
        let request = LlmRequest::new(vec![ChatMessage::user("hello")])
            .with_system_prompt("Be a ghost")
            .with_temperature(0.9);
        let body = serde_json::to_value(GenerateContentRequest::from(&request)).unwrap();

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be a ghost");
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "pog"}, {"text": "!"}]},
                "finishReason": "STOP"
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("pog!"));
        assert_eq!(response.finish_reason().as_deref(), Some("STOP"));
    }

    #[test]
    fn test_response_without_text() {
        let blocked: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert_eq!(blocked.text(), None);

        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text(), None);
        assert_eq!(empty.finish_reason(), None);
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_sending() {
        let result = client(None).generate(LlmRequest::new(vec![])).await;
        assert!(matches!(result, Err(GeminiError::MissingApiKey)));
    }
}
