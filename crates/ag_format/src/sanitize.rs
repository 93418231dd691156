use std::ops::Range;

/// Remove `**bold**` / `*italic*` emphasis, keeping the inner text, then drop any
/// `*` left over from unbalanced markers. Nothing else is touched.
pub fn sanitize(line: &str) -> String {
    strip_emphasis(line).replace('*', "")
}

/// Replace every well-formed emphasis span with its inner text.
///
/// A span opens with `**` or `*`, its inner text is non-empty, does not start or
/// end with whitespace and does not cross a line break. The shortest closing
/// marker wins, and the double marker is tried before the single one.
pub fn strip_emphasis(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '*' {
            let span = match_emphasis(&chars, i, 2).or_else(|| match_emphasis(&chars, i, 1));
            if let Some((inner, next)) = span {
                out.extend(&chars[inner]);
                i = next;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

/// Returns the inner range and the index just past the closing marker.
fn match_emphasis(chars: &[char], start: usize, width: usize) -> Option<(Range<usize>, usize)> {
    let inner_start = start + width;
    if inner_start > chars.len() || !chars[start..inner_start].iter().all(|&c| c == '*') {
        return None;
    }
    if chars.get(inner_start)?.is_whitespace() {
        return None;
    }

    let mut close = inner_start + 1;
    while close + width <= chars.len() {
        let last = chars[close - 1];
        if is_line_break(last) {
            return None;
        }
        if !last.is_whitespace() && chars[close..close + width].iter().all(|&c| c == '*') {
            return Some((inner_start..close, close + width));
        }
        close += 1;
    }

    None
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
