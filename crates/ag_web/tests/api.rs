use std::sync::Arc;

use ag_core::{ArticleRequest, Error, GenerationModel, Result};
use ag_inference::models::DummyModel;
use ag_web::{router, AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

#[derive(Debug)]
struct QuotaModel;

#[async_trait::async_trait]
impl GenerationModel for QuotaModel {
    fn name(&self) -> &str {
        "Quota"
    }

    async fn generate(&self, _request: &ArticleRequest) -> Result<String> {
        Err(Error::QuotaExhausted("RESOURCE_EXHAUSTED".to_string()))
    }
}

fn app_with(model: Arc<dyn GenerationModel>) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(model));
    (router(state.clone()), state)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_generate_remote_work_article() {
    let (app, state) = app_with(Arc::new(DummyModel::new()));
    let (status, body) = post_json(
        app,
        "/api/articles",
        json!({"topic": "future of remote work", "keyword": "remote work", "tone": "informative", "length": "short"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["article"]["model"], "Dummy");
    assert_eq!(body["article"]["request"]["word_count"], 300);

    let blocks = body["blocks"].as_array().unwrap();
    assert!(blocks.iter().any(|b| b["type"] == "heading"));
    let matched: Vec<&str> = blocks
        .iter()
        .filter_map(|b| b["segments"].as_array())
        .flatten()
        .filter(|s| s["kind"] == "matched_keyword")
        .filter_map(|s| s["text"].as_str())
        .collect();
    assert!(matched.contains(&"remote work"));

    let html = body["clipboard"]["html"].as_str().unwrap();
    assert!(html.contains(">remote work</span>"));
    assert!(body["screen_html"].as_str().unwrap().contains("<mark class=\"keyword\">"));
    assert!(!state.is_busy());
}

#[tokio::test]
async fn test_generate_rejects_blank_topic() {
    let (app, _) = app_with(Arc::new(DummyModel::new()));
    let (status, body) = post_json(app, "/api/articles", json!({"topic": "   "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please enter the article topic.");
}

#[tokio::test]
async fn test_generate_missing_topic_is_a_bad_request() {
    let (app, _) = app_with(Arc::new(DummyModel::new()));
    let (status, body) = post_json(app, "/api/articles", json!({"tone": "informative"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please enter the article topic.");
}

#[tokio::test]
async fn test_generate_unknown_tone_or_length_is_a_bad_request() {
    let (app, state) = app_with(Arc::new(DummyModel::new()));
    for bad in [
        json!({"topic": "gardening", "tone": "sarcastic"}),
        json!({"topic": "gardening", "length": "huge"}),
    ] {
        let (status, body) = post_json(app.clone(), "/api/articles", bad).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request:"));
    }
    assert!(!state.is_busy());
}

#[tokio::test]
async fn test_render_rejects_unreadable_body() {
    let (app, _) = app_with(Arc::new(DummyModel::new()));
    let (status, body) = post_json(app, "/api/render", json!({"keyword": "fox"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("text"));
}

#[tokio::test]
async fn test_generate_while_busy() {
    let (app, state) = app_with(Arc::new(DummyModel::new()));
    let _guard = state.try_begin_generation().unwrap();
    let (status, body) = post_json(app, "/api/articles", json!({"topic": "gardening"})).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("already being generated"));
}

#[tokio::test]
async fn test_generation_error_is_reported_and_slot_released() {
    let (app, state) = app_with(Arc::new(QuotaModel));
    let (status, body) = post_json(app.clone(), "/api/articles", json!({"topic": "gardening"})).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        body["error"],
        Error::QuotaExhausted(String::new()).user_message()
    );
    assert!(!state.is_busy());

    let (status, _) = post_json(app, "/api/articles", json!({"topic": "gardening"})).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_render_without_keyword() {
    let (app, _) = app_with(Arc::new(DummyModel::new()));
    let (status, body) = post_json(
        app,
        "/api/render",
        json!({"text": "# Intro\n\nBody text here.\n\n## Next"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["blocks"],
        json!([
            {"type": "heading", "level": 1, "text": "Intro"},
            {"type": "paragraph", "segments": [{"kind": "plain_text", "text": "Body text here."}]},
            {"type": "heading", "level": 2, "text": "Next"}
        ])
    );
    assert_eq!(body["clipboard"]["plain_text"], "Intro\nBody text here.\nNext");
    assert!(!body["clipboard"]["html"].as_str().unwrap().contains("<span"));
}

#[tokio::test]
async fn test_index_page() {
    let (app, _) = app_with(Arc::new(DummyModel::new()));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("<form id=\"form\">"));
}
