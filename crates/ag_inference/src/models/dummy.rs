use std::fmt;

use ag_core::{ArticleRequest, GenerationModel, Result};

/// Offline model that writes a short, fixed-shape article about the request.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl GenerationModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn generate(&self, request: &ArticleRequest) -> Result<String> {
        let topic = request.topic();
        let focus = request.keyword().unwrap_or(topic);
        let title = capitalize(topic);

        let article = format!(
            "# {title}: A **Complete** Guide\n\
             \n\
             {Focus} is one of the most discussed subjects today. This {tone} article takes \
             roughly {words} words to explain what {focus} means and why it matters.\n\
             \n\
             ## Why {focus} matters\n\
             \n\
             People who understand {focus} make better decisions. *Small* changes add up, \
             and {focus} rewards steady attention over time.\n\
             \n\
             ### Getting started\n\
             \n\
             Start small, measure what works, and revisit your approach to {focus} regularly.\n\
             \n\
             ## Conclusion\n\
             \n\
             {Focus} is not a passing trend. With a clear plan, anyone can benefit from it.\n",
            title = title,
            focus = focus,
            Focus = capitalize(focus),
            tone = request.tone().label().to_lowercase(),
            words = request.word_count(),
        );

        tracing::debug!("Dummy model produced {} bytes", article.len());
        Ok(article.trim().to_string())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::{ArticleLength, ArticleTone};
    use ag_format::{render, DisplayBlock};

    #[tokio::test]
    async fn test_dummy_model() {
        let model = DummyModel::new();
        let request = ArticleRequest::new(
            "future of remote work",
            Some("remote work"),
            ArticleTone::Informative,
            ArticleLength::Short,
        )
        .unwrap();

        let text = model.generate(&request).await.unwrap();
        assert!(text.starts_with("# Future of remote work"));
        assert!(text.contains("## Why remote work matters"));
        assert!(text.contains("roughly 300 words"));
        assert_eq!(model.name(), "Dummy");
    }

    #[tokio::test]
    async fn test_remote_work_scenario() {
        let request = ArticleRequest::new(
            "future of remote work",
            Some("remote work"),
            ArticleTone::Informative,
            ArticleLength::Short,
        )
        .unwrap();
        let text = DummyModel::new().generate(&request).await.unwrap();
        let blocks = render(&text, request.keyword());

        let headings = blocks.iter().filter(|b| matches!(b, DisplayBlock::Heading { .. })).count();
        assert!(headings >= 1);
        let matches: Vec<&str> = blocks.iter().flat_map(|b| b.matched_keywords()).collect();
        assert!(matches.contains(&"remote work"));
        assert!(matches.contains(&"Remote work"));
    }

    #[tokio::test]
    async fn test_without_keyword_uses_topic() {
        let request = ArticleRequest::new("gardening", None, ArticleTone::Casual, ArticleLength::Medium).unwrap();
        let text = DummyModel::new().generate(&request).await.unwrap();
        assert!(text.contains("## Why gardening matters"));
        assert!(text.contains("casual article"));
    }
}
