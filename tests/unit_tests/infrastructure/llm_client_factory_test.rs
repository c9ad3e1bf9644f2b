use pdf_assistant::infrastructure::llm::{LlmClientFactory, LlmClientFactoryError};
use pdf_assistant::presentation::config::{ApiToken, DEFAULT_ENDPOINT, LlmProvider, LlmSettings};

fn settings(provider: LlmProvider, endpoint: &str, model: Option<&str>) -> LlmSettings {
    LlmSettings {
        provider,
        endpoint: endpoint.to_string(),
        model: model.map(str::to_string),
        temperature: 0.5,
        max_tokens: 1024,
    }
}

fn token() -> ApiToken {
    ApiToken::new(Some("hf_test".to_string())).unwrap()
}

#[test]
fn given_huggingface_settings_when_creating_then_succeeds() {
    let result = LlmClientFactory::create(
        &settings(LlmProvider::HuggingFace, DEFAULT_ENDPOINT, None),
        &token(),
    );

    assert!(result.is_ok());
}

#[test]
fn given_blank_endpoint_when_creating_then_returns_missing_endpoint() {
    let result = LlmClientFactory::create(&settings(LlmProvider::HuggingFace, "  ", None), &token());

    assert!(matches!(result, Err(LlmClientFactoryError::MissingEndpoint)));
}

#[test]
fn given_openai_without_model_when_creating_then_returns_missing_model() {
    let result = LlmClientFactory::create(
        &settings(LlmProvider::OpenAi, "https://api.openai.com/v1", None),
        &token(),
    );

    assert!(matches!(result, Err(LlmClientFactoryError::MissingModel(_))));
}

#[test]
fn given_openai_with_model_when_creating_then_succeeds() {
    let result = LlmClientFactory::create(
        &settings(LlmProvider::OpenAi, "https://api.openai.com/v1", Some("gpt-4o-mini")),
        &token(),
    );

    assert!(result.is_ok());
}
