mod assistant_service;
mod document_service;

pub use assistant_service::{AssistantError, AssistantService};
pub use document_service::{DocumentError, DocumentService};
