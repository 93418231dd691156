use std::ops::Range;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum HighlightSegment {
    PlainText(String),
    /// The matched text as it appears in the line, not as the keyword was typed.
    MatchedKeyword(String),
}

impl HighlightSegment {
    pub fn text(&self) -> &str {
        match self {
            HighlightSegment::PlainText(text) | HighlightSegment::MatchedKeyword(text) => text,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, HighlightSegment::MatchedKeyword(_))
    }
}

/// A trimmed, non-empty keyword matched case-insensitively on whole words.
///
/// A match may not touch a word character (alphanumeric or `_`) on either
/// side. Everything inside the keyword, punctuation and spaces included, is
/// compared literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    text: String,
    chars: Vec<char>,
}

impl Keyword {
    pub fn new(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            chars: text.chars().collect(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte ranges of every non-overlapping match, scanning left to right.
    pub fn find_matches(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            match self.match_at(text, pos) {
                Some(end) if end > pos => {
                    spans.push(pos..end);
                    pos = end;
                }
                // Always step forward, even if a match were ever empty.
                _ => pos += char_len_at(text, pos),
            }
        }

        spans
    }

    /// Split `text` into plain and matched segments.
    pub fn segments(&self, text: &str) -> Vec<HighlightSegment> {
        let spans = self.find_matches(text);
        if spans.is_empty() {
            return vec![HighlightSegment::PlainText(text.to_string())];
        }

        let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
        let mut last = 0;
        for span in spans {
            if span.start > last {
                segments.push(HighlightSegment::PlainText(text[last..span.start].to_string()));
            }
            segments.push(HighlightSegment::MatchedKeyword(text[span.clone()].to_string()));
            last = span.end;
        }
        if last < text.len() {
            segments.push(HighlightSegment::PlainText(text[last..].to_string()));
        }

        segments
    }

    fn match_at(&self, text: &str, start: usize) -> Option<usize> {
        if !boundary_before(text, start) {
            return None;
        }

        let mut end = start;
        let mut rest = text[start..].chars();
        for &expected in &self.chars {
            let actual = rest.next()?;
            if !chars_eq_ignore_case(actual, expected) {
                return None;
            }
            end += actual.len_utf8();
        }

        boundary_after(text, end).then_some(end)
    }
}

/// Highlight `keyword` in `text`. With no usable keyword, or no match, the
/// whole text comes back as a single plain segment.
pub fn highlight(text: &str, keyword: Option<&str>) -> Vec<HighlightSegment> {
    match keyword.and_then(Keyword::new) {
        Some(keyword) => keyword.segments(text),
        None => vec![HighlightSegment::PlainText(text.to_string())],
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn boundary_before(text: &str, pos: usize) -> bool {
    text[..pos].chars().next_back().map_or(true, |c| !is_word_char(c))
}

fn boundary_after(text: &str, pos: usize) -> bool {
    text[pos..].chars().next().map_or(true, |c| !is_word_char(c))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn char_len_at(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(1, char::len_utf8)
}
