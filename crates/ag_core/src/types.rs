use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArticleTone {
    #[default]
    Informative,
    Casual,
    Formal,
}

impl ArticleTone {
    pub const ALL: [ArticleTone; 3] = [ArticleTone::Informative, ArticleTone::Casual, ArticleTone::Formal];

    pub fn label(&self) -> &'static str {
        match self {
            ArticleTone::Informative => "Informative",
            ArticleTone::Casual => "Casual",
            ArticleTone::Formal => "Formal",
        }
    }
}

impl fmt::Display for ArticleTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ArticleTone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ArticleTone::ALL
            .into_iter()
            .find(|tone| tone.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidRequest(format!("Unknown tone: {}", s)))
    }
}

/// Target length of an article. Each maps to an approximate word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArticleLength {
    #[default]
    Short,
    Medium,
    Long,
}

impl ArticleLength {
    pub const ALL: [ArticleLength; 3] = [ArticleLength::Short, ArticleLength::Medium, ArticleLength::Long];

    pub fn word_count(&self) -> u32 {
        match self {
            ArticleLength::Short => 300,
            ArticleLength::Medium => 600,
            ArticleLength::Long => 1000,
        }
    }

    pub fn from_word_count(words: u32) -> Option<Self> {
        ArticleLength::ALL.into_iter().find(|l| l.word_count() == words)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArticleLength::Short => "Short",
            ArticleLength::Medium => "Medium",
            ArticleLength::Long => "Long",
        }
    }
}

impl fmt::Display for ArticleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (~{} words)", self.label(), self.word_count())
    }
}

/// A validated request for one article. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRequest {
    topic: String,
    keyword: Option<String>,
    tone: ArticleTone,
    word_count: u32,
}

impl ArticleRequest {
    pub fn new(topic: &str, keyword: Option<&str>, tone: ArticleTone, length: ArticleLength) -> Result<Self> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(Error::InvalidRequest("Please enter the article topic.".to_string()));
        }
        let keyword = keyword
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);
        tracing::debug!("Article request: topic={:?} keyword={:?} tone={} words={}", topic, keyword, tone, length.word_count());

        Ok(Self {
            topic: topic.to_string(),
            keyword,
            tone,
            word_count: length.word_count(),
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The keyword, if one was given. Never empty.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn tone(&self) -> ArticleTone {
        self.tone
    }

    pub fn word_count(&self) -> u32 {
        self.word_count
    }
}

/// Raw article text returned by a generation model, with the request that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedArticle {
    pub request: ArticleRequest,
    pub text: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedArticle {
    pub fn new(request: ArticleRequest, text: String, model: &str) -> Self {
        Self {
            request,
            text,
            model: model.to_string(),
            generated_at: Utc::now(),
        }
    }
}
