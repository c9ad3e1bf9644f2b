use crate::application::ports::FileLoaderError;
use crate::application::services::{AssistantError, DocumentError};

pub const BANNER: &str = "PDF asistanı başlatıldı!";
pub const COMMAND_PROMPT: &str = "\nNe yapmak istiyorsunuz? (çıkmak için 'exit' yazın) > ";
pub const FILE_PROMPT: &str =
    "Hangi PDF dosyasını okumak istiyorsunuz? (Tam dosya yolu veya sadece dosya adı) > ";
pub const FAREWELL: &str = "Agent kapatılıyor...";
pub const NO_PDFS: &str = "Klasörde hiç PDF dosyası bulunamadı!";
pub const EMPTY_DOCUMENT: &str = "PDF içeriği boş veya okunamadı.";
pub const ERROR_TAG: &str = "Hata: ";

pub fn pdf_listing(names: &[String]) -> String {
    if names.is_empty() {
        NO_PDFS.to_string()
    } else {
        format!("Klasörde bulunan PDF dosyaları: {}", names.join(", "))
    }
}

pub fn document_text(text: &str) -> String {
    format!("\nPDF İçeriği:\n{text}")
}

pub fn agent_answer(output: &str) -> String {
    format!("\nAgent Cevabı: {output}")
}

pub fn document_error(error: &DocumentError) -> String {
    match error {
        DocumentError::NotFound(path) => format!("Dosya bulunamadı: {path}"),
        DocumentError::Extraction(FileLoaderError::NoTextFound(_)) => EMPTY_DOCUMENT.to_string(),
        DocumentError::Extraction(e) => format!("{ERROR_TAG}{e}"),
    }
}

pub fn assistant_error(error: &AssistantError) -> String {
    format!("{ERROR_TAG}{error}")
}
