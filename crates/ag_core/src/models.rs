use std::fmt;

use async_trait::async_trait;

use crate::types::ArticleRequest;
use crate::Result;

/// A text generation backend that turns an article request into raw article text.
#[async_trait]
pub trait GenerationModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Generate the raw article text. Headings use `#`, `##` and `###` line prefixes.
    async fn generate(&self, request: &ArticleRequest) -> Result<String>;
}
