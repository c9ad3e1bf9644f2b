use std::sync::Arc;

use pdf_assistant::application::ports::LlmClientError;
use pdf_assistant::application::services::{AssistantError, AssistantService};
use pdf_assistant::domain::{AgentRequest, MAX_INPUT_CHARS};

use crate::helpers::{RateLimitedLlmClient, RecordingLlmClient};

#[tokio::test]
async fn given_text_when_summarizing_then_sends_summary_prompt_and_returns_completion() {
    let llm = RecordingLlmClient::replying("özet");
    let service = AssistantService::new(llm.clone());

    let result = service.summarize("uzun bir belge").await.unwrap();

    assert_eq!(result, "özet");
    assert_eq!(llm.prompts(), vec!["Bu metni özetle:\n\nuzun bir belge"]);
}

#[tokio::test]
async fn given_no_target_language_when_translating_then_defaults_to_english() {
    let llm = RecordingLlmClient::replying("hello");
    let service = AssistantService::new(llm.clone());

    service.translate("merhaba", None).await.unwrap();

    assert_eq!(llm.prompts(), vec!["Bu metni English diline çevir:\n\nmerhaba"]);
}

#[tokio::test]
async fn given_question_when_answering_then_prompt_carries_question_and_text() {
    let llm = RecordingLlmClient::replying("Ahmet");
    let service = AssistantService::new(llm.clone());

    let answer = service.answer("Kitabı Ahmet yazdı.", "Yazar kim?").await.unwrap();

    assert_eq!(answer, "Ahmet");
    assert!(llm.prompts()[0].contains("Yazar kim?"));
    assert!(llm.prompts()[0].ends_with("Kitabı Ahmet yazdı."));
}

#[tokio::test]
async fn given_oversized_text_when_summarizing_then_payload_is_capped() {
    let llm = RecordingLlmClient::replying("ok");
    let service = AssistantService::new(llm.clone());
    let text = "a".repeat(MAX_INPUT_CHARS * 2);

    service.summarize(&text).await.unwrap();

    let prompt = &llm.prompts()[0];
    assert_eq!(prompt.matches('a').count(), MAX_INPUT_CHARS);
}

#[tokio::test]
async fn given_agent_request_when_responding_then_input_is_forwarded_verbatim() {
    let llm = RecordingLlmClient::replying("cevap");
    let service = AssistantService::new(llm.clone());

    let output = service
        .respond(AgentRequest::new("Rust nedir? Kısaca anlat."))
        .await
        .unwrap();

    assert_eq!(output, "cevap");
    assert_eq!(llm.prompts(), vec!["Rust nedir? Kısaca anlat."]);
}

#[tokio::test]
async fn given_failing_model_when_responding_then_returns_completion_error() {
    let service = AssistantService::new(Arc::new(RateLimitedLlmClient));

    let result = service.respond(AgentRequest::new("hello")).await;

    assert!(matches!(
        result,
        Err(AssistantError::Completion(LlmClientError::RateLimited))
    ));
}

#[tokio::test]
async fn given_request_longer_than_cap_when_responding_then_full_input_reaches_model() {
    let llm = RecordingLlmClient::replying("ok");
    let service = AssistantService::new(llm.clone());
    let input = "b".repeat(MAX_INPUT_CHARS + 500);

    service.respond(AgentRequest::new(input.clone())).await.unwrap();

    assert_eq!(llm.prompts(), vec![input]);
}
