//! Projections from display blocks to output syntaxes.
//!
//! Every function here only maps blocks to text. Classification and keyword
//! matching happen once, in [`render`], so the screen markup, the plain text
//! and the clipboard HTML always agree on headings and matched spans.

use std::fmt::Write;

use serde::Serialize;

use crate::classify::HeadingLevel;
use crate::highlight::HighlightSegment;
use crate::render::{render, DisplayBlock};

const CLIPBOARD_HEADING_STYLE: &str = "color: #8b5cf6; font-weight: 600;";
const CLIPBOARD_PARAGRAPH_STYLE: &str = "line-height: 1.6; margin-bottom: 0.75em;";
const CLIPBOARD_KEYWORD_STYLE: &str = "color: #2563eb; font-weight: 600; font-size: 1.05em;";

/// Both representations written to the clipboard as a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClipboardPayload {
    pub plain_text: String,
    pub html: String,
}

impl ClipboardPayload {
    pub fn from_blocks(blocks: &[DisplayBlock]) -> Self {
        Self {
            plain_text: to_plain_text(blocks),
            html: to_clipboard_html(blocks),
        }
    }
}

pub fn format_for_clipboard(raw: &str, keyword: Option<&str>) -> ClipboardPayload {
    ClipboardPayload::from_blocks(&render(raw, keyword))
}

/// Heading and paragraph text, one non-empty line each.
pub fn to_plain_text(blocks: &[DisplayBlock]) -> String {
    blocks
        .iter()
        .map(DisplayBlock::text)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Markup with inline styles, for pasting into rich text editors.
pub fn to_clipboard_html(blocks: &[DisplayBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            DisplayBlock::Heading { level, text } => {
                let tier = level.tier();
                let _ = write!(
                    out,
                    "<{tag} style=\"{base} font-size: {size}; margin-top: {top}; margin-bottom: {bottom};\">",
                    tag = tier.tag,
                    base = CLIPBOARD_HEADING_STYLE,
                    size = tier.font_size,
                    top = tier.margin_top,
                    bottom = tier.margin_bottom,
                );
                escape_into(&mut out, text);
                let _ = writeln!(out, "</{}>", tier.tag);
            }
            DisplayBlock::Paragraph { segments } => {
                if segments.iter().all(|s| s.text().trim().is_empty()) {
                    continue;
                }
                let _ = write!(out, "<p style=\"{}\">", CLIPBOARD_PARAGRAPH_STYLE);
                for segment in segments {
                    match segment {
                        HighlightSegment::PlainText(text) => escape_into(&mut out, text),
                        HighlightSegment::MatchedKeyword(text) => {
                            let _ = write!(out, "<span style=\"{}\">", CLIPBOARD_KEYWORD_STYLE);
                            escape_into(&mut out, text);
                            out.push_str("</span>");
                        }
                    }
                }
                out.push_str("</p>\n");
            }
        }
    }
    out
}

/// Class based markup for on-screen display. Pair with [`screen_stylesheet`].
pub fn to_screen_html(blocks: &[DisplayBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            DisplayBlock::Heading { level, text } => {
                let tag = level.tier().tag;
                let _ = write!(out, "<{} class=\"heading tier-{}\">", tag, level.get());
                escape_into(&mut out, text);
                let _ = writeln!(out, "</{}>", tag);
            }
            DisplayBlock::Paragraph { segments } => {
                out.push_str("<p class=\"paragraph\">");
                for segment in segments {
                    match segment {
                        HighlightSegment::PlainText(text) => escape_into(&mut out, text),
                        HighlightSegment::MatchedKeyword(text) => {
                            out.push_str("<mark class=\"keyword\">");
                            escape_into(&mut out, text);
                            out.push_str("</mark>");
                        }
                    }
                }
                out.push_str("</p>\n");
            }
        }
    }
    out
}

/// CSS for [`to_screen_html`], with heading sizes taken from the same tiers the
/// clipboard markup uses.
pub fn screen_stylesheet() -> String {
    let mut css = String::new();
    for level in 1..=HeadingLevel::MAX as usize {
        let tier = HeadingLevel::new(level).tier();
        let _ = writeln!(
            css,
            ".heading.tier-{} {{ font-size: {}; margin-top: {}; margin-bottom: {}; }}",
            level, tier.font_size, tier.margin_top, tier.margin_bottom
        );
    }
    css.push_str(".heading { font-weight: 600; color: #a855f7; }\n");
    css.push_str(".paragraph { line-height: 1.625; text-align: justify; margin-bottom: 0.75rem; }\n");
    css.push_str("mark.keyword { background: none; color: #2563eb; font-weight: 600; font-size: 1.05em; margin: 0 1px; }\n");
    css
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
