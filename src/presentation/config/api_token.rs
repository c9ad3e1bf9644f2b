use std::fmt;

use super::SettingsError;

pub const TOKEN_ENV_VAR: &str = "HUGGINGFACE_TOKEN";

/// Credential for the hosted inference service. Never printed.
#[derive(Clone)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::new(std::env::var(TOKEN_ENV_VAR).ok())
    }

    pub fn new(raw: Option<String>) -> Result<Self, SettingsError> {
        match raw.map(|value| value.trim().to_string()) {
            Some(value) if !value.is_empty() => Ok(Self(value)),
            _ => Err(SettingsError::MissingToken(TOKEN_ENV_VAR)),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken([REDACTED])")
    }
}
