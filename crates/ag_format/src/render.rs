use serde::Serialize;

use crate::classify::{classify, ClassifiedLine, HeadingLevel};
use crate::highlight::{HighlightSegment, Keyword};
use crate::sanitize::sanitize;

/// Visual treatment of a heading, shared by every projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingTier {
    pub tag: &'static str,
    pub font_size: &'static str,
    pub margin_top: &'static str,
    pub margin_bottom: &'static str,
}

impl HeadingLevel {
    pub fn tier(self) -> HeadingTier {
        match self.get() {
            1 => HeadingTier {
                tag: "h3",
                font_size: "1.875rem",
                margin_top: "1.5rem",
                margin_bottom: "0.75rem",
            },
            2 => HeadingTier {
                tag: "h4",
                font_size: "1.5rem",
                margin_top: "1.25rem",
                margin_bottom: "0.5rem",
            },
            _ => HeadingTier {
                tag: "h5",
                font_size: "1.25rem",
                margin_top: "1rem",
                margin_bottom: "0.5rem",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayBlock {
    Heading { level: HeadingLevel, text: String },
    Paragraph { segments: Vec<HighlightSegment> },
}

impl DisplayBlock {
    /// Text content with highlighting flattened away.
    pub fn text(&self) -> String {
        match self {
            DisplayBlock::Heading { text, .. } => text.clone(),
            DisplayBlock::Paragraph { segments } => segments.iter().map(HighlightSegment::text).collect(),
        }
    }

    pub fn matched_keywords(&self) -> Vec<&str> {
        match self {
            DisplayBlock::Heading { .. } => Vec::new(),
            DisplayBlock::Paragraph { segments } => segments
                .iter()
                .filter(|s| s.is_match())
                .map(HighlightSegment::text)
                .collect(),
        }
    }
}

/// Turn raw article text into display blocks, one per surviving line, in order.
pub fn render(raw: &str, keyword: Option<&str>) -> Vec<DisplayBlock> {
    let keyword = keyword.and_then(Keyword::new);
    let blocks: Vec<DisplayBlock> = raw
        .split('\n')
        .filter_map(|line| render_line(line, keyword.as_ref()))
        .collect();

    tracing::debug!(
        "Rendered {} blocks ({} headings) with keyword {:?}",
        blocks.len(),
        blocks.iter().filter(|b| matches!(b, DisplayBlock::Heading { .. })).count(),
        keyword.as_ref().map(Keyword::as_str)
    );
    blocks
}

fn render_line(line: &str, keyword: Option<&Keyword>) -> Option<DisplayBlock> {
    match classify(&sanitize(line))? {
        ClassifiedLine::Heading { level, text } => Some(DisplayBlock::Heading { level, text }),
        ClassifiedLine::Paragraph { text } => {
            let segments = match keyword {
                Some(keyword) => keyword.segments(&text),
                None => vec![HighlightSegment::PlainText(text)],
            };
            if let [HighlightSegment::PlainText(only)] = segments.as_slice() {
                if only.is_empty() {
                    return None;
                }
            }
            Some(DisplayBlock::Paragraph { segments })
        }
    }
}
