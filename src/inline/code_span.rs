//! Code span resolution.
//!
//! Code spans have highest precedence among inline elements. Their
//! content is escaped here, wrapped in `<code>`, and replaced by a
//! placeholder so later passes never see it.

use std::borrow::Cow;

use memchr::memchr;

use super::placeholder::Stash;
use crate::escape::escape_html_into;

/// A resolved code span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpan {
    /// Start of opening backticks.
    pub opener_pos: usize,
    /// End of opening backticks.
    pub opener_end: usize,
    /// Start of closing backticks.
    pub closer_pos: usize,
    /// End of closing backticks.
    pub closer_end: usize,
}

impl CodeSpan {
    /// Get the content range (between the backticks).
    pub fn content_range(&self) -> (usize, usize) {
        (self.opener_end, self.closer_pos)
    }
}

/// Find the first code span starting at or after `from`.
///
/// A backtick run of length N followed by non-backtick content and then a
/// run of length M forms a span delimited by `min(N, M)` backticks: surplus
/// backticks on the left stay in front of the span as text, surplus on the
/// right stay after it.
pub fn find_code_span(text: &str, from: usize) -> Option<CodeSpan> {
    let bytes = text.as_bytes();
    let run_start = from + memchr(b'`', &bytes[from..])?;
    let run_end = run_start + run_len(bytes, run_start);
    // The run is maximal, so any later backtick leaves non-empty content
    let closer_pos = run_end + memchr(b'`', &bytes[run_end..])?;
    let ticks = (run_end - run_start).min(run_len(bytes, closer_pos));

    Some(CodeSpan {
        opener_pos: run_end - ticks,
        opener_end: run_end,
        closer_pos,
        closer_end: closer_pos + ticks,
    })
}

#[inline]
fn run_len(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().take_while(|&&b| b == b'`').count()
}

/// Replace every code span with a placeholder token, stashing its
/// rendered `<code>` HTML.
pub fn stash_code_spans<'a>(text: &'a str, stash: &mut Stash) -> Cow<'a, str> {
    let mut out: Option<String> = None;
    let mut pos = 0;

    while let Some(span) = find_code_span(text, pos) {
        let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
        buf.push_str(&text[pos..span.opener_pos]);

        let (start, end) = span.content_range();
        let mut html = String::with_capacity(end - start + 13);
        html.push_str("<code>");
        escape_html_into(&mut html, &text[start..end]);
        html.push_str("</code>");
        stash.push_into(html, buf);

        pos = span.closer_end;
    }

    match out {
        None => Cow::Borrowed(text),
        Some(mut buf) => {
            buf.push_str(&text[pos..]);
            Cow::Owned(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str) -> Vec<&str> {
        let mut found = Vec::new();
        let mut pos = 0;
        while let Some(span) = find_code_span(text, pos) {
            let (start, end) = span.content_range();
            found.push(&text[start..end]);
            pos = span.closer_end;
        }
        found
    }

    #[test]
    fn test_simple_code_span() {
        let span = find_code_span("hello `code` world", 0).unwrap();
        assert_eq!(span.content_range(), (7, 11));
        assert_eq!(span.opener_pos, 6);
        assert_eq!(span.closer_end, 12);
    }

    #[test]
    fn test_double_backtick() {
        assert_eq!(spans("``code``"), vec!["code"]);
    }

    #[test]
    fn test_multiple_code_spans() {
        assert_eq!(spans("`a` and `b`"), vec!["a", "b"]);
    }

    #[test]
    fn test_unbalanced_runs() {
        // Surplus closing backtick stays behind the span
        let span = find_code_span("`a``", 0).unwrap();
        assert_eq!((span.opener_pos, span.closer_end), (0, 3));

        // Surplus opening backtick stays in front of it
        let span = find_code_span("``a`", 0).unwrap();
        assert_eq!((span.opener_pos, span.closer_end), (1, 4));
    }

    #[test]
    fn test_no_closer() {
        assert_eq!(find_code_span("hello `world", 0), None);
        assert_eq!(find_code_span("```", 0), None);
        assert_eq!(find_code_span("no ticks", 0), None);
    }

    #[test]
    fn test_stash_replaces_and_escapes() {
        let mut stash = Stash::default();
        let text = stash_code_spans("use `<b>` here", &mut stash);
        assert_eq!(text, "use \u{0}0\u{0} here");
        assert_eq!(stash.get(0), Some("<code>&lt;b&gt;</code>"));
    }

    #[test]
    fn test_stash_borrows_without_spans() {
        let mut stash = Stash::default();
        let text = stash_code_spans("plain *text*", &mut stash);
        assert!(matches!(text, Cow::Borrowed(_)));
        assert!(stash.is_empty());
    }
}
