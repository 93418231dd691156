use serde::Serialize;

/// Heading depth, always within `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MAX: u8 = 3;

    /// Clamps `level` into `1..=3`.
    pub fn new(level: usize) -> Self {
        Self(level.clamp(1, Self::MAX as usize) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    Heading { level: HeadingLevel, text: String },
    Paragraph { text: String },
}

impl ClassifiedLine {
    pub fn text(&self) -> &str {
        match self {
            ClassifiedLine::Heading { text, .. } | ClassifiedLine::Paragraph { text } => text,
        }
    }
}

/// Classify an already sanitized line. Blank lines, and lines that are nothing
/// but `#` and whitespace, yield `None`.
pub fn classify(line: &str) -> Option<ClassifiedLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some((level, rest)) = heading_prefix(trimmed) {
        return Some(ClassifiedLine::Heading {
            level,
            text: strip_hashes(rest),
        });
    }

    let text = strip_hashes(trimmed);
    if text.trim().is_empty() {
        return None;
    }
    Some(ClassifiedLine::Paragraph { text })
}

/// Matches a run of one to three `#` followed by at least one whitespace char.
/// Returns the level and the text after the whitespace.
fn heading_prefix(line: &str) -> Option<(HeadingLevel, &str)> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    // A longer run has a `#` where the whitespace would have to be.
    if hashes == 0 || hashes > HeadingLevel::MAX as usize {
        return None;
    }

    let rest = &line[hashes..];
    let body = rest.trim_start();
    if body.len() == rest.len() {
        return None;
    }
    Some((HeadingLevel::new(hashes), body))
}

fn strip_hashes(text: &str) -> String {
    text.replace('#', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: usize, text: &str) -> Option<ClassifiedLine> {
        Some(ClassifiedLine::Heading {
            level: HeadingLevel::new(level),
            text: text.to_string(),
        })
    }

    fn paragraph(text: &str) -> Option<ClassifiedLine> {
        Some(ClassifiedLine::Paragraph { text: text.to_string() })
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(classify("# Title"), heading(1, "Title"));
        assert_eq!(classify("## Section"), heading(2, "Section"));
        assert_eq!(classify("### Detail"), heading(3, "Detail"));
    }

    #[test]
    fn test_inner_hashes_are_stripped() {
        assert_eq!(classify("## A # B"), heading(2, "A  B"));
        assert_eq!(classify("# C# and F#"), heading(1, "C and F"));
    }

    #[test]
    fn test_whitespace_after_marker_is_consumed() {
        assert_eq!(classify("#\t  Tabbed"), heading(1, "Tabbed"));
        assert_eq!(classify("   ## Indented  "), heading(2, "Indented"));
    }

    #[test]
    fn test_marker_without_whitespace_is_paragraph() {
        assert_eq!(classify("#hashtag"), paragraph("hashtag"));
        assert_eq!(classify("##Title"), paragraph("Title"));
    }

    #[test]
    fn test_four_or_more_hashes_are_not_a_heading() {
        assert_eq!(classify("#### Title"), paragraph(" Title"));
        assert_eq!(classify("###### Deep"), paragraph(" Deep"));
    }

    #[test]
    fn test_blank_lines_yield_nothing() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
        assert_eq!(classify("\t\r"), None);
    }

    #[test]
    fn test_hash_only_lines_yield_nothing() {
        assert_eq!(classify("####"), None);
        assert_eq!(classify("#### #"), None);
    }

    #[test]
    fn test_heading_with_only_hashes_keeps_empty_text() {
        assert_eq!(classify("# #"), heading(1, ""));
    }

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(classify("plain text"), paragraph("plain text"));
        assert_eq!(classify("  padded text \r"), paragraph("padded text"));
    }

    #[test]
    fn test_level_is_clamped() {
        assert_eq!(HeadingLevel::new(0).get(), 1);
        assert_eq!(HeadingLevel::new(7).get(), 3);
    }
}
