use std::fmt::Display;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::DocumentPath;

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<Vec<String>, FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        collect_pages((0..page_count).map(|page_index| doc.extract_text(page_index)))
    }
}

/// Any page that fails to extract fails the whole document.
fn collect_pages<E: Display>(
    pages: impl IntoIterator<Item = Result<String, E>>,
) -> Result<Vec<String>, FileLoaderError> {
    pages
        .into_iter()
        .enumerate()
        .map(|(page_index, page)| {
            page.map_err(|e| {
                FileLoaderError::ExtractionFailed(format!(
                    "failed to extract page {page_index}: {e}"
                ))
            })
        })
        .collect()
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, path), fields(path = %path))]
    async fn extract_text(&self, path: &DocumentPath) -> Result<String, FileLoaderError> {
        let owned_path: PathBuf = path.as_path().to_path_buf();

        let pages = tokio::task::spawn_blocking(move || Self::extract_pages(&owned_path))
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        let text = pages.join("\n");
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(FileLoaderError::NoTextFound(path.to_string()));
        }

        Ok(trimmed.to_string())
    }
}
