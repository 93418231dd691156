use std::fmt;
use std::sync::Arc;

use ag_core::{ArticleRequest, Error, GenerationModel, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::prompt::build_prompt;
use crate::Config;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    thinking_config: ThinkingConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
    status: Option<String>,
}

impl GenerateContentResponse {
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| content.parts.iter().filter_map(|p| p.text.as_deref()).collect())
            .unwrap_or_default()
    }
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiModel {
    client: Arc<Client>,
    api_key: String,
    model_name: String,
    endpoint: Url,
    language: String,
}

impl fmt::Debug for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl GeminiModel {
    /// Fails with [`Error::MissingCredential`] when the config carries no API key.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(Error::MissingCredential)?;
        let model_name = config.model_name().to_string();
        let endpoint = config
            .base_url()?
            .join(&format!("v1beta/models/{}:generateContent", model_name))
            .map_err(|e| Error::InvalidRequest(format!("Invalid model name {}: {}", model_name, e)))?;

        Ok(Self {
            client: Arc::new(Client::new()),
            api_key,
            model_name,
            endpoint,
            language: config.language.clone(),
        })
    }
}

#[async_trait]
impl GenerationModel for GeminiModel {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn generate(&self, request: &ArticleRequest) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart {
                    text: build_prompt(request, &self.language),
                }],
            }],
            generation_config: GenerationConfig {
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        };

        tracing::info!("🧠 Requesting article from {} ({})", self.model_name, request.topic());
        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = classify_api_failure(status, &body);
            tracing::error!("Error calling Gemini API: {}", error);
            return Err(error);
        }

        let text = response.json::<GenerateContentResponse>().await?.text();
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyResponse);
        }
        tracing::debug!("Received {} bytes of article text", text.len());
        Ok(text.to_string())
    }
}

/// Map a failed API response to the error taxonomy.
pub(crate) fn classify_api_failure(status: StatusCode, body: &str) -> Error {
    let (message, api_status) = match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(parsed) => (parsed.error.message, parsed.error.status.unwrap_or_default()),
        Err(_) => (body.trim().to_string(), String::new()),
    };
    let message = if message.is_empty() {
        status.to_string()
    } else {
        message
    };

    let mentions = |needle: &str| body.contains(needle) || message.contains(needle);
    if mentions("API key not valid") || mentions("API_KEY_INVALID") {
        Error::InvalidCredential(message)
    } else if status == StatusCode::TOO_MANY_REQUESTS
        || api_status == "RESOURCE_EXHAUSTED"
        || mentions("Quota exceeded")
        || mentions("RESOURCE_EXHAUSTED")
    {
        Error::QuotaExhausted(message)
    } else {
        Error::Transport(format!("{}: {}", status, message))
    }
}
