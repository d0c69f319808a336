//! Chat-completion generator for OpenAI-compatible backends.
//!
//! Defaults target Groq's OpenAI-compatible endpoint; any other vendor works
//! by pointing `api_base` elsewhere and naming the right key variable.

use super::AnswerGenerator;
use crate::config::LlmSettings;
use crate::error::{PodbotnikError, Result};
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Default timeout for LLM API requests (2 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Answer generator backed by an OpenAI-compatible chat completion API.
pub struct ChatGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
}

impl ChatGenerator {
    /// Build a generator from LLM settings.
    ///
    /// Fails with a configuration error when the API key variable is unset,
    /// so the problem surfaces at startup rather than on the first question.
    pub fn from_settings(settings: &LlmSettings) -> Result<Self> {
        let api_key = std::env::var(&settings.api_key_env).map_err(|_| {
            PodbotnikError::Config(format!(
                "{} not set. Export it or configure llm.api_key_env.",
                settings.api_key_env
            ))
        })?;

        let config = OpenAIConfig::new()
            .with_api_base(&settings.api_base)
            .with_api_key(api_key);

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client: Client::with_config(config).with_http_client(http_client),
            model: settings.model.clone(),
            temperature: settings.temperature,
        })
    }
}

#[async_trait]
impl AnswerGenerator for ChatGenerator {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| PodbotnikError::Generation(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .max_tokens(max_tokens)
            .temperature(self.temperature)
            .build()
            .map_err(|e| PodbotnikError::Generation(e.to_string()))?;

        debug!(model = %self.model, max_tokens, "Requesting chat completion");

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| PodbotnikError::Generation(format!("LLM request failed: {}", e)))?;

        response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| PodbotnikError::Generation("Empty response from LLM".to_string()))
    }
}
