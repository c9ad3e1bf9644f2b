mod document_store;
mod file_loader;
mod llm_client;

pub use document_store::{DocumentStore, DocumentStoreError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{GenerationOptions, LlmClient, LlmClientError};
