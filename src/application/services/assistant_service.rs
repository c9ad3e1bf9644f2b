use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{AgentRequest, DEFAULT_TARGET_LANGUAGE, Task};

pub struct AssistantService {
    llm_client: Arc<dyn LlmClient>,
}

impl AssistantService {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    pub async fn summarize(&self, text: &str) -> Result<String, AssistantError> {
        self.run(&Task::Summarize, text).await
    }

    /// Translates into `target_language`, English when `None`.
    pub async fn translate(
        &self,
        text: &str,
        target_language: Option<&str>,
    ) -> Result<String, AssistantError> {
        let language = target_language.unwrap_or(DEFAULT_TARGET_LANGUAGE);
        self.run(&Task::translate_to(language), text).await
    }

    pub async fn answer(&self, text: &str, question: &str) -> Result<String, AssistantError> {
        self.run(&Task::answer(question), text).await
    }

    /// Free-form turn: the raw input goes to the model as the prompt.
    pub async fn respond(&self, request: AgentRequest) -> Result<String, AssistantError> {
        self.run(&Task::FreeForm, &request.input).await
    }

    #[tracing::instrument(skip(self, task, text), fields(task = task.name()))]
    pub async fn run(&self, task: &Task, text: &str) -> Result<String, AssistantError> {
        let prompt = task.prompt(text);

        let completion = self
            .llm_client
            .complete(&prompt)
            .await
            .map_err(AssistantError::Completion)?;

        tracing::info!(chars = completion.chars().count(), "Completion received");

        Ok(completion)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("completion: {0}")]
    Completion(LlmClientError),
}
