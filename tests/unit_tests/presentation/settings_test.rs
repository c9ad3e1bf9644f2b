use std::path::{Path, PathBuf};

use pdf_assistant::presentation::config::{
    DEFAULT_ENDPOINT, DocumentsSettings, Environment, LlmProvider, Settings, application_base_dir,
};

#[test]
fn given_no_settings_file_when_loading_then_uses_defaults() {
    let dir = tempfile::TempDir::new().unwrap();

    let settings = Settings::load_from_dir(dir.path(), Environment::Test).unwrap();

    assert_eq!(settings.llm.provider, LlmProvider::HuggingFace);
    assert_eq!(settings.llm.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(settings.llm.max_tokens, 1024);
    assert!((settings.llm.temperature - 0.5).abs() < f32::EPSILON);
    assert_eq!(settings.documents.directory, Path::new("files"));
    assert!(!settings.logging.json_format);
}

#[test]
fn given_environment_file_when_loading_then_overrides_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("appsettings.test.toml"),
        r#"
[llm]
provider = "openai"
endpoint = "http://localhost:1234/v1"
model = "qwen2.5-7b-instruct"
max_tokens = 256

[documents]
directory = "/srv/pdfs"
"#,
    )
    .unwrap();

    let settings = Settings::load_from_dir(dir.path(), Environment::Test).unwrap();

    assert_eq!(settings.llm.provider, LlmProvider::OpenAi);
    assert_eq!(settings.llm.endpoint, "http://localhost:1234/v1");
    assert_eq!(settings.llm.model.as_deref(), Some("qwen2.5-7b-instruct"));
    assert_eq!(settings.llm.max_tokens, 256);
    assert_eq!(settings.documents.directory, Path::new("/srv/pdfs"));
}

#[test]
fn given_file_for_other_environment_when_loading_then_it_is_ignored() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("appsettings.prod.toml"),
        "[llm]\nmax_tokens = 1\n",
    )
    .unwrap();

    let settings = Settings::load_from_dir(dir.path(), Environment::Test).unwrap();

    assert_eq!(settings.llm.max_tokens, 1024);
}

#[test]
fn given_relative_documents_directory_when_resolving_then_anchors_at_base_dir() {
    let documents = DocumentsSettings {
        directory: PathBuf::from("files"),
    };
    let base_dir = std::env::temp_dir().join("pdf-assistant-bin");

    assert_eq!(documents.resolve_directory(&base_dir), base_dir.join("files"));
}

#[test]
fn given_absolute_documents_directory_when_resolving_then_keeps_it() {
    let absolute = std::env::temp_dir().join("shared-pdfs");
    let documents = DocumentsSettings {
        directory: absolute.clone(),
    };

    assert_eq!(documents.resolve_directory(Path::new("/opt/app")), absolute);
}

#[test]
fn given_running_binary_when_locating_base_dir_then_returns_existing_directory() {
    let base_dir = application_base_dir().unwrap();

    assert!(base_dir.is_dir());
}
