mod agent_request;
mod document;
mod task;

pub use agent_request::AgentRequest;
pub use document::{DocumentPath, is_pdf_name};
pub use task::{DEFAULT_TARGET_LANGUAGE, MAX_INPUT_CHARS, Task, truncate_chars};
