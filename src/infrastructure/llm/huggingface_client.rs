use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationOptions, LlmClient, LlmClientError};
use crate::infrastructure::observability::sanitize_prompt;

/// Client for the Hugging Face hosted text-generation endpoint.
pub struct HuggingFaceClient {
    client: Client,
    endpoint: String,
    api_token: String,
    options: GenerationOptions,
}

#[derive(Serialize)]
struct TextGenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Serialize)]
struct GenerationParameters {
    temperature: f32,
    max_new_tokens: usize,
    return_full_text: bool,
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextGenerationResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
    Failure { error: String },
}

impl HuggingFaceClient {
    pub fn new(endpoint: &str, api_token: &str, options: GenerationOptions) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
            options,
        }
    }
}

#[async_trait]
impl LlmClient for HuggingFaceClient {
    #[tracing::instrument(skip_all, fields(prompt = %sanitize_prompt(prompt)))]
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        let request_body = TextGenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                temperature: self.options.temperature,
                max_new_tokens: self.options.max_tokens,
                return_full_text: false,
            },
        };

        tracing::debug!(endpoint = %self.endpoint, "Sending prompt to Hugging Face inference");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let raw_bytes = response
            .bytes()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        let parsed: TextGenerationResponse = serde_json::from_slice(&raw_bytes).map_err(|e| {
            tracing::error!(
                raw_response = %String::from_utf8_lossy(&raw_bytes),
                "Failed to parse Hugging Face response"
            );
            LlmClientError::InvalidResponse(e.to_string())
        })?;

        match parsed {
            TextGenerationResponse::Batch(generations) => generations
                .into_iter()
                .next()
                .map(|g| g.generated_text)
                .ok_or_else(|| LlmClientError::InvalidResponse("empty generations".to_string())),
            TextGenerationResponse::Single(generation) => Ok(generation.generated_text),
            TextGenerationResponse::Failure { error } => {
                Err(LlmClientError::ApiRequestFailed(error))
            }
        }
    }
}
