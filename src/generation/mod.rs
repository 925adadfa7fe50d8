//! Text generation against hosted language models.

mod gemini;
mod openai;

pub use gemini::GeminiGenerator;
pub use openai::OpenAIGenerator;

use crate::config::{GenerationProvider, GenerationSettings};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for text generation.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a single text response for a prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}

/// Build the configured generator for a credential.
pub fn build_generator(settings: &GenerationSettings, api_key: &str) -> Result<Arc<dyn Generator>> {
    let generator: Arc<dyn Generator> = match settings.provider {
        GenerationProvider::Gemini => Arc::new(GeminiGenerator::from_settings(settings, api_key)?),
        GenerationProvider::OpenAI => Arc::new(OpenAIGenerator::from_settings(settings, api_key)?),
    };
    Ok(generator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_generator_per_provider() {
        let settings = GenerationSettings::default();
        let generator = build_generator(&settings, "key").unwrap();
        assert_eq!(generator.model(), "gemini-1.5-flash");

        let settings = GenerationSettings {
            provider: GenerationProvider::OpenAI,
            model: "gpt-4o-mini".to_string(),
            ..Default::default()
        };
        let generator = build_generator(&settings, "key").unwrap();
        assert_eq!(generator.model(), "gpt-4o-mini");
    }
}
