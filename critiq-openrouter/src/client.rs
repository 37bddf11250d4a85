//! OpenRouter chat-completions client
//!
//! Speaks the OpenAI-compatible chat-completions protocol against the
//! OpenRouter API and adapts it to the [`Generator`] seam.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use critiq_core::config::GeneratorConfig;
use critiq_core::{Generator, ReviewPrompt};

use crate::error::{Error, Result};

/// Client for the OpenRouter chat-completions API
pub struct OpenRouterClient {
    client: Client,
    config: GeneratorConfig,
    api_key: String,
}

impl OpenRouterClient {
    /// Create a new client from generator configuration and an API key
    ///
    /// The key is injected by the caller; this crate never reads the
    /// environment itself. Fails on an empty key so a misconfigured
    /// deployment surfaces at startup rather than on the first request.
    pub fn new(config: GeneratorConfig, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Auth("API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Created OpenRouter client"
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Model identifier sent with every request
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send one chat-completion request and return the assistant text
    ///
    /// A failed request is not retried; the caller decides what a failure
    /// means for its own state.
    async fn chat_completion(&self, prompt: &ReviewPrompt) -> Result<String> {
        let request = ChatCompletionsRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.user.clone(),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(model = %request.model, "Sending chat-completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let completion: ChatCompletionsResponse = response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::MalformedResponse("no choices in response".to_string()))?;

        if choice.message.content.is_empty() {
            return Err(Error::MalformedResponse(
                "empty completion content".to_string(),
            ));
        }

        debug!(
            finish_reason = ?choice.finish_reason,
            content_len = choice.message.content.len(),
            "Received chat completion"
        );

        Ok(choice.message.content)
    }
}

impl std::fmt::Debug for OpenRouterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterClient")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Generator for OpenRouterClient {
    fn name(&self) -> &'static str {
        "openrouter"
    }

    async fn generate(&self, prompt: &ReviewPrompt) -> critiq_core::Result<String> {
        self.chat_completion(prompt)
            .await
            .map_err(|e| critiq_core::Error::Generation(e.to_string()))
    }
}

/// Pull a readable message out of an OpenRouter error body
///
/// Error bodies usually look like `{"error": {"message": "..."}}`; fall
/// back to the raw body when the shape differs.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")?
                .as_str()
                .map(std::string::ToString::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

#[derive(Debug, Serialize)]
struct ChatCompletionsRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionsResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
    finish_reason: Option<String>,
}
