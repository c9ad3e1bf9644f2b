mod api_token;
mod environment;
mod settings;

pub use api_token::{ApiToken, TOKEN_ENV_VAR};
pub use environment::Environment;
pub use settings::{
    DEFAULT_ENDPOINT, DocumentsSettings, LlmProvider, LlmSettings, LoggingSettings, Settings,
    SettingsError, application_base_dir,
};
