use async_trait::async_trait;

use crate::domain::DocumentPath;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(&self, path: &DocumentPath) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in {0}")]
    NoTextFound(String),
}
