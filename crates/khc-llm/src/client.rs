use async_trait::async_trait;
use khc_config::LlmConfig;
use khc_core::Locale;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::CompletionError;
use crate::types::{CompletionRequest, CompletionResponse};

/// Generation limit used when the caller has no opinion
pub const DEFAULT_MAX_TOKENS: u32 = 80;

/// Anything that turns a prompt into speakable text
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Complete `prompt`, never failing
    ///
    /// Implementations return fallback text instead of errors.
    async fn chat_completion(&self, prompt: &str, max_tokens: u32) -> String;
}

/// Client for the OpenRouter chat completion endpoint
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<SecretString>,
    locale: Locale,
}

impl OpenRouterClient {
    /// Create from completion configuration
    ///
    /// A missing or empty API key is accepted; every call then answers
    /// with the "not configured" sentence without touching the network.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Transport` if the HTTP client cannot be built
    pub fn new(config: &LlmConfig, locale: Locale) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.expose_secret().is_empty());

        if api_key.is_none() {
            tracing::warn!("no completion API key configured, answers will be canned");
        }

        Ok(Self {
            http,
            endpoint: completions_url(&config.base_url),
            model: config.model.clone(),
            api_key,
            locale,
        })
    }

    /// Perform one completion call, surfacing every failure
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, CompletionError> {
        let Some(api_key) = &self.api_key else {
            return Err(CompletionError::MissingApiKey);
        };

        let request = CompletionRequest::prompt(self.model.as_str(), prompt, max_tokens);

        let response = self
            .http
            .post(self.endpoint.as_str())
            .bearer_auth(api_key.expose_secret())
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let data: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| CompletionError::Parse(format!("JSON decode error: {e}")))?;

        CompletionResponse::from_json(&data)?
            .message_content()
            .map(str::to_owned)
            .ok_or(CompletionError::NoContent)
    }
}

#[async_trait]
impl ChatCompletion for OpenRouterClient {
    async fn chat_completion(&self, prompt: &str, max_tokens: u32) -> String {
        match self.complete(prompt, max_tokens).await {
            Ok(content) => content,
            Err(CompletionError::MissingApiKey) => {
                tracing::error!("API key is not set");
                self.locale.not_configured().to_owned()
            }
            // structural mismatch is already logged while reading the response
            Err(CompletionError::NoContent) => self.locale.answer_unavailable().to_owned(),
            Err(e) => {
                tracing::error!(model = %self.model, error = %e, "chat completion failed");
                self.locale.answer_unavailable().to_owned()
            }
        }
    }
}

/// Build the chat completions URL from the API base
fn completions_url(base_url: &Url) -> String {
    let base = base_url.as_str().trim_end_matches('/');
    format!("{base}/chat/completions")
}
