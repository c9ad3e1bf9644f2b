use std::sync::Arc;

use crate::application::ports::{GenerationOptions, LlmClient};
use crate::presentation::config::{ApiToken, LlmProvider, LlmSettings};

use super::huggingface_client::HuggingFaceClient;
use super::openai_client::OpenAiClient;

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("llm.endpoint must not be empty")]
    MissingEndpoint,
    #[error("llm.model is required for the {0} provider")]
    MissingModel(&'static str),
}

pub struct LlmClientFactory;

impl LlmClientFactory {
    pub fn create(
        settings: &LlmSettings,
        api_token: &ApiToken,
    ) -> Result<Arc<dyn LlmClient>, LlmClientFactoryError> {
        let endpoint = settings.endpoint.trim();
        if endpoint.is_empty() {
            return Err(LlmClientFactoryError::MissingEndpoint);
        }

        let options = GenerationOptions {
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        };

        match settings.provider {
            LlmProvider::HuggingFace => {
                tracing::info!(endpoint, "Using Hugging Face inference client");
                Ok(Arc::new(HuggingFaceClient::new(
                    endpoint,
                    api_token.expose(),
                    options,
                )))
            }
            LlmProvider::OpenAi => {
                let model = settings
                    .model
                    .as_deref()
                    .filter(|m| !m.trim().is_empty())
                    .ok_or(LlmClientFactoryError::MissingModel("openai"))?;
                tracing::info!(endpoint, model, "Using OpenAI-compatible chat client");
                Ok(Arc::new(OpenAiClient::new(
                    endpoint,
                    api_token.expose(),
                    model,
                    options,
                )))
            }
        }
    }
}
