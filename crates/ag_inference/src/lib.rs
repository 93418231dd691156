use std::fmt;

use ag_core::{Error, Result};
use url::Url;

pub mod models;
pub mod prompt;

pub const DEFAULT_MODEL_NAME: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
pub const DEFAULT_LANGUAGE: &str = "English";

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ModelBackend {
    #[default]
    Gemini,
    /// Canned offline output, no network access.
    Dummy,
}

#[derive(Clone)]
pub struct Config {
    pub backend: ModelBackend,
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub base_url: Option<String>,
    pub language: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("backend", &self.backend)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: ModelBackend::default(),
            api_key: None,
            model_name: None,
            base_url: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Config {
    /// Default config with the API key taken from the environment.
    pub fn from_env() -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn model_name(&self) -> &str {
        self.model_name.as_deref().unwrap_or(DEFAULT_MODEL_NAME)
    }

    /// Parsed base URL, always ending in `/` so endpoint paths join onto it.
    pub fn base_url(&self) -> Result<Url> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let with_slash = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{}/", raw)
        };
        Url::parse(&with_slash).map_err(|e| Error::InvalidRequest(format!("Invalid base URL {}: {}", raw, e)))
    }
}

pub mod prelude {
    pub use super::models::create_model;
    pub use super::{Config, ModelBackend};
    pub use ag_core::{ArticleRequest, Error, GenerationModel, Result};
}

pub use models::create_model;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_debug_redacts_key() {
        let config = Config {
            api_key: Some("secret-key".to_string()),
            ..Config::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = Config {
            base_url: Some("http://localhost:8080/proxy".to_string()),
            ..Config::default()
        };
        assert_eq!(config.base_url().unwrap().as_str(), "http://localhost:8080/proxy/");
        assert_eq!(Config::default().base_url().unwrap().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_base_url() {
        let config = Config {
            base_url: Some("not a url".to_string()),
            ..Config::default()
        };
        assert!(matches!(config.base_url(), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_default_model_name() {
        assert_eq!(Config::default().model_name(), DEFAULT_MODEL_NAME);
    }
}
