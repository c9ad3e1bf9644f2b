use async_trait::async_trait;

use crate::domain::DocumentPath;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// File names in the documents directory that end in `.pdf`.
    async fn list_pdfs(&self) -> Result<Vec<String>, DocumentStoreError>;

    fn resolve(&self, name: &str) -> DocumentPath;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("document directory unavailable: {0}")]
    Io(#[from] std::io::Error),
}
