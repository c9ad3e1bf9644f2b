use std::path::{Path, PathBuf};

use config::Environment as EnvironmentSource;
use config::{Config, File};
use serde::Deserialize;

use super::Environment;

pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/Qwen/Qwen2.5-Coder-32B-Instruct";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub llm: LlmSettings,
    pub documents: DocumentsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    /// Full model URL for Hugging Face, API base URL for OpenAI-compatible servers.
    pub endpoint: String,
    pub model: Option<String>,
    pub temperature: f32,
    pub max_tokens: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LlmProvider {
    #[serde(rename = "huggingface")]
    HuggingFace,
    #[serde(rename = "openai")]
    OpenAi,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsSettings {
    pub directory: PathBuf,
}

impl DocumentsSettings {
    /// Relative directories are anchored at `base_dir`, absolute ones are
    /// kept as configured.
    pub fn resolve_directory(&self, base_dir: &Path) -> PathBuf {
        if self.directory.is_absolute() {
            self.directory.clone()
        } else {
            base_dir.join(&self.directory)
        }
    }
}

/// Directory holding the running executable.
pub fn application_base_dir() -> std::io::Result<PathBuf> {
    let executable = std::env::current_exe()?;
    executable.parent().map(Path::to_path_buf).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", executable.display()),
        )
    })
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("{0} is not set; add it to the environment or a .env file")]
    MissingToken(&'static str),
    #[error("{0}")]
    InvalidEnvironment(String),
}

impl Settings {
    /// Loads settings from the working directory.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        Self::load_from_dir(Path::new("."), environment)
    }

    /// Built-in defaults, then `appsettings.{environment}.toml` in `dir` when
    /// present, then `APP__SECTION__KEY` environment variables.
    pub fn load_from_dir(dir: &Path, environment: Environment) -> Result<Self, SettingsError> {
        let settings_file = dir.join(format!("appsettings.{}", environment.as_str()));

        let configuration = Config::builder()
            .set_default("llm.provider", "huggingface")?
            .set_default("llm.endpoint", DEFAULT_ENDPOINT)?
            .set_default("llm.temperature", 0.5)?
            .set_default("llm.max_tokens", 1024)?
            .set_default("documents.directory", "files")?
            .set_default("logging.level", "warn,pdf_assistant=info")?
            .set_default("logging.json_format", false)?
            .add_source(File::with_name(&settings_file.to_string_lossy()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(configuration.try_deserialize()?)
    }
}
