use std::sync::Arc;

use crate::application::ports::{DocumentStore, DocumentStoreError, FileLoader, FileLoaderError};

pub struct DocumentService {
    store: Arc<dyn DocumentStore>,
    loader: Arc<dyn FileLoader>,
}

impl DocumentService {
    pub fn new(store: Arc<dyn DocumentStore>, loader: Arc<dyn FileLoader>) -> Self {
        Self { store, loader }
    }

    pub async fn list(&self) -> Result<Vec<String>, DocumentStoreError> {
        self.store.list_pdfs().await
    }

    /// Extracts the text of `name`, a bare file name or an absolute path.
    #[tracing::instrument(skip(self))]
    pub async fn read(&self, name: &str) -> Result<String, DocumentError> {
        let path = self.store.resolve(name);

        let exists = tokio::fs::try_exists(path.as_path()).await.map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("cannot access {path}: {e}"))
        })?;
        if !exists {
            tracing::warn!(path = %path, "Requested document does not exist");
            return Err(DocumentError::NotFound(path.to_string()));
        }

        let text = self.loader.extract_text(&path).await?;
        tracing::info!(chars = text.chars().count(), "Document text extracted");

        Ok(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Extraction(#[from] FileLoaderError),
}
