//! OpenAI chat-completion generator.

use super::Generator;
use crate::config::GenerationSettings;
use crate::error::{Result, StudyError};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// OpenAI-based generator.
pub struct OpenAIGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
}

impl OpenAIGenerator {
    pub fn from_settings(settings: &GenerationSettings, api_key: &str) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(StudyError::MissingCredential);
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| StudyError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let mut config = OpenAIConfig::new().with_api_key(api_key.trim());
        if let Some(endpoint) = settings.endpoint.as_deref().filter(|e| !e.trim().is_empty()) {
            config = config.with_api_base(endpoint.trim_end_matches('/'));
        }

        Ok(Self {
            client: Client::with_config(config).with_http_client(http_client),
            model: settings.model.clone(),
            temperature: settings.temperature,
        })
    }
}

#[async_trait]
impl Generator for OpenAIGenerator {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| StudyError::Generation(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .build()
            .map_err(|e| StudyError::Generation(e.to_string()))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            StudyError::Generation(format!("OpenAI API error: {}", e))
        })?;

        let text = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| StudyError::Generation("Empty response from LLM".to_string()))?;

        debug!("Generated {} chars", text.chars().count());
        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
