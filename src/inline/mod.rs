//! Inline processor.
//!
//! Runs in three phases over one block's text:
//! 1. Code spans: escaped, rendered, and stashed behind placeholders
//! 2. Span rules, in order: image, link, bold-italic, bold, italic
//! 3. Placeholders restored with the stashed HTML
//!
//! Code span content is therefore escaped exactly once and never seen by
//! the link or emphasis rules. Text outside code spans is left unescaped
//! unless the parser is built with `with_escape_text(true)`.

mod code_span;
mod emphasis;
mod links;
mod placeholder;

use std::borrow::Cow;

pub use code_span::{find_code_span, stash_code_spans, CodeSpan};
pub use emphasis::{rewrite_bold, rewrite_bold_italic, rewrite_italic};
pub use links::{parse_link, rewrite_images, rewrite_links, LinkParts};
pub use placeholder::Stash;

use crate::escape;

/// A named rewrite pass over placeholder-substituted text.
#[derive(Clone, Copy)]
pub struct SpanRule {
    pub name: &'static str,
    pub rewrite: fn(&str) -> Cow<'_, str>,
}

/// Span rules in application order. Images precede links since image
/// syntax contains link syntax; longer emphasis markers precede shorter
/// ones so a short pass never steals from a longer run.
pub const SPAN_RULES: &[SpanRule] = &[
    SpanRule { name: "image", rewrite: rewrite_images },
    SpanRule { name: "link", rewrite: rewrite_links },
    SpanRule { name: "bold-italic", rewrite: rewrite_bold_italic },
    SpanRule { name: "bold", rewrite: rewrite_bold },
    SpanRule { name: "italic", rewrite: rewrite_italic },
];

/// Inline parser state.
#[derive(Debug, Default)]
pub struct InlineParser {
    /// Reusable placeholder stash, cleared on every parse.
    stash: Stash,
    /// Escape text outside code spans before the span rules run.
    escape_text: bool,
}

impl InlineParser {
    /// Create a new inline parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape `&`, `<`, `>`, `"` and `'` in text outside code spans.
    pub fn with_escape_text(mut self, escape_text: bool) -> Self {
        self.escape_text = escape_text;
        self
    }

    /// Render one block's text to HTML.
    pub fn parse(&mut self, text: &str) -> String {
        self.stash.clear();

        let mut current = stash_code_spans(text, &mut self.stash);

        if self.escape_text && escape::needs_escape(&current) {
            let mut escaped = String::with_capacity(current.len() + current.len() / 4);
            escape::escape_html_into(&mut escaped, &current);
            current = Cow::Owned(escaped);
        }

        for rule in SPAN_RULES {
            let rewritten = match (rule.rewrite)(&current) {
                Cow::Borrowed(_) => None,
                Cow::Owned(next) => Some(next),
            };
            if let Some(next) = rewritten {
                log::trace!("inline rule {} applied", rule.name);
                current = Cow::Owned(next);
            }
        }

        self.stash.restore(&current).into_owned()
    }
}

/// Render one block's text to HTML with a fresh parser.
///
/// # Example
/// ```
/// assert_eq!(
///     md2html::inline::parse_inline("`[a](b)` and **bold**"),
///     "<code>[a](b)</code> and <strong>bold</strong>"
/// );
/// ```
pub fn parse_inline(text: &str) -> String {
    InlineParser::new().parse(text)
}

/// Left-to-right, non-overlapping rewrite.
///
/// `find` returns the offset of the next candidate byte in a slice.
/// `try_match` is called with the full text and the candidate's offset;
/// on a match it writes the replacement into `out` and returns the end
/// offset of the matched source, and on a miss it returns `None` without
/// writing. A miss resumes the search one byte later.
///
/// Candidates must be ASCII bytes so every cut stays on a char boundary.
pub(crate) fn rewrite_matches<'a, F, M>(text: &'a str, mut find: F, mut try_match: M) -> Cow<'a, str>
where
    F: FnMut(&[u8]) -> Option<usize>,
    M: FnMut(&'a str, usize, &mut String) -> Option<usize>,
{
    let bytes = text.as_bytes();
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(offset) = find(&bytes[pos..]) else {
            break;
        };
        let at = pos + offset;

        let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 32));
        let mark = buf.len();
        buf.push_str(&text[copied..at]);

        match try_match(text, at, buf) {
            Some(end) => {
                copied = end;
                pos = end;
            }
            None => {
                buf.truncate(mark);
                pos = at + 1;
            }
        }
    }

    match out {
        Some(mut buf) if copied > 0 => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
        _ => Cow::Borrowed(text),
    }
}
