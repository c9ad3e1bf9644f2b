use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{DocumentStore, DocumentStoreError};
use crate::domain::{DocumentPath, is_pdf_name};

/// Flat directory of PDF files on the local filesystem.
pub struct LocalPdfDirectory {
    root: PathBuf,
}

impl LocalPdfDirectory {
    /// Creates the directory when it does not exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, DocumentStoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait]
impl DocumentStore for LocalPdfDirectory {
    async fn list_pdfs(&self) -> Result<Vec<String>, DocumentStoreError> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_pdf_name(&name) {
                names.push(name);
            }
        }

        tracing::debug!(root = %self.root.display(), count = names.len(), "Listed PDF files");

        Ok(names)
    }

    fn resolve(&self, name: &str) -> DocumentPath {
        DocumentPath::resolve(&self.root, name)
    }
}
