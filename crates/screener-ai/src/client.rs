//! Text generation backends.

use std::time::Duration;

use serde_json::{Value, json};
use tracing::info;

use crate::error::AiError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that turns a prompt into model text. Blocking.
pub trait TextGenerator: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Endpoint without the key, safe to log.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// `generateContent` over HTTPS with a global request timeout. Non-2xx
/// statuses surface as [`AiError::Invocation`].
pub struct GeminiClient {
    agent: ureq::Agent,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(true)
            .build()
            .into();
        Self { agent, config }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let endpoint = self.config.endpoint();
        let url = format!("{endpoint}?key={}", self.config.api_key);
        let payload = request_body(prompt).to_string();

        info!(endpoint, prompt_len = prompt.len(), "invoking text model");

        let mut response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .send(payload.as_str())
            .map_err(|e| AiError::Invocation(e.to_string()))?;

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| AiError::Invocation(e.to_string()))?;

        let text = reply_text(&serde_json::from_str(&body)?)?;
        info!(endpoint, text_len = text.len(), "text model replied");
        Ok(text)
    }
}

/// `{contents: [{parts: [{text}]}]}`
pub fn request_body(prompt: &str) -> Value {
    json!({ "contents": [{ "parts": [{ "text": prompt }] }] })
}

/// Pull `candidates[0].content.parts[0].text` out of a response body.
pub fn reply_text(body: &Value) -> Result<String, AiError> {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AiError::ResponseParse("no candidate text in response".to_string()))
}
