use std::sync::Arc;

use ag_core::{ArticleLength, ArticleRequest, ArticleTone, Error, GeneratedArticle};
use ag_format::{render, to_screen_html, ClipboardPayload, DisplayBlock};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::page::index_page;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateArticleBody {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub tone: ArticleTone,
    #[serde(default)]
    pub length: ArticleLength,
}

#[derive(Debug, Deserialize)]
pub struct RenderBody {
    pub text: String,
    #[serde(default)]
    pub keyword: Option<String>,
}

/// Every view of one article, all derived from the same blocks.
#[derive(Debug, Serialize)]
pub struct FormattedArticle {
    pub blocks: Vec<DisplayBlock>,
    pub screen_html: String,
    pub clipboard: ClipboardPayload,
}

impl FormattedArticle {
    pub fn new(text: &str, keyword: Option<&str>) -> Self {
        let blocks = render(text, keyword);
        Self {
            screen_html: to_screen_html(&blocks),
            clipboard: ClipboardPayload::from_blocks(&blocks),
            blocks,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateArticleResponse {
    pub article: GeneratedArticle,
    #[serde(flatten)]
    pub formatted: FormattedArticle,
}

pub async fn index() -> Html<String> {
    Html(index_page())
}

/// Unreadable bodies are reported like any other invalid request.
fn read_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            Err(Error::InvalidRequest(format!("Invalid request: {}", rejection.body_text())).into())
        }
    }
}

pub async fn generate_article(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateArticleBody>, JsonRejection>,
) -> Result<Json<GenerateArticleResponse>, ApiError> {
    let body = read_body(body)?;
    let request = ArticleRequest::new(&body.topic, body.keyword.as_deref(), body.tone, body.length)?;
    let _guard = state.try_begin_generation().ok_or(ApiError::Busy)?;

    tracing::info!("📝 Generating article about {:?} with {}", request.topic(), state.model.name());
    let text = match state.model.generate(&request).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Error generating article: {}", e);
            return Err(e.into());
        }
    };

    let formatted = FormattedArticle::new(&text, request.keyword());
    let article = GeneratedArticle::new(request, text, state.model.name());
    tracing::info!("✨ Generated article with {} blocks", formatted.blocks.len());
    Ok(Json(GenerateArticleResponse { article, formatted }))
}

pub async fn render_article(
    body: Result<Json<RenderBody>, JsonRejection>,
) -> Result<Json<FormattedArticle>, ApiError> {
    let body = read_body(body)?;
    Ok(Json(FormattedArticle::new(&body.text, body.keyword.as_deref())))
}
