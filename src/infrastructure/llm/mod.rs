mod huggingface_client;
mod llm_client_factory;
mod openai_client;

pub use huggingface_client::HuggingFaceClient;
pub use llm_client_factory::{LlmClientFactory, LlmClientFactoryError};
pub use openai_client::OpenAiClient;
