use std::sync::Arc;

use ag_core::{GenerationModel, Result};

use crate::{Config, ModelBackend};

pub mod dummy;
pub mod gemini;

pub use dummy::DummyModel;
pub use gemini::GeminiModel;

/// Build the configured model. The Gemini backend fails fast without an API key.
pub async fn create_model(config: Option<Config>) -> Result<Arc<dyn GenerationModel>> {
    let config = config.unwrap_or_else(Config::from_env);
    let model: Arc<dyn GenerationModel> = match config.backend {
        ModelBackend::Gemini => Arc::new(GeminiModel::new(&config)?),
        ModelBackend::Dummy => Arc::new(DummyModel::new()),
    };
    tracing::debug!("Created model {:?}", model);
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::Error;

    #[tokio::test]
    async fn test_create_gemini_without_key_fails() {
        let config = Config {
            backend: ModelBackend::Gemini,
            api_key: None,
            ..Config::default()
        };
        let result = create_model(Some(config)).await;
        assert!(matches!(result, Err(Error::MissingCredential)));
    }

    #[tokio::test]
    async fn test_create_models() {
        let config = Config {
            backend: ModelBackend::Dummy,
            ..Config::default()
        };
        assert_eq!(create_model(Some(config)).await.unwrap().name(), "Dummy");

        let config = Config {
            api_key: Some("test-key".to_string()),
            ..Config::default()
        };
        assert_eq!(create_model(Some(config)).await.unwrap().name(), "Gemini");
    }
}
