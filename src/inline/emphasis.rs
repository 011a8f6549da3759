//! Emphasis and strong emphasis rewriting.
//!
//! Each pass handles one marker length and only matches content free of
//! `*` and `_`. Passes run longest marker first, so `***x***` becomes
//! `<strong><em>x</em></strong>` before the shorter passes can split it.

use std::borrow::Cow;

use memchr::memchr2;

use super::rewrite_matches;

/// `***x***` or `___x___` → `<strong><em>x</em></strong>`
pub fn rewrite_bold_italic(text: &str) -> Cow<'_, str> {
    rewrite_delimited(text, &["***", "___"], "<strong><em>", "</em></strong>")
}

/// `**x**` or `__x__` → `<strong>x</strong>`
pub fn rewrite_bold(text: &str) -> Cow<'_, str> {
    rewrite_delimited(text, &["**", "__"], "<strong>", "</strong>")
}

/// `*x*` or `_x_` → `<em>x</em>`
pub fn rewrite_italic(text: &str) -> Cow<'_, str> {
    rewrite_delimited(text, &["*", "_"], "<em>", "</em>")
}

fn rewrite_delimited<'a>(
    text: &'a str,
    markers: &[&str],
    open: &str,
    close: &str,
) -> Cow<'a, str> {
    rewrite_matches(
        text,
        |bytes| memchr2(b'*', b'_', bytes),
        |text, at, out| {
            let (inner, end) = markers.iter().find_map(|marker| delimited(text, at, marker))?;
            out.push_str(open);
            out.push_str(inner);
            out.push_str(close);
            Some(end)
        },
    )
}

/// `marker` + non-empty content without `*`/`_` + the same `marker`,
/// starting at `at`. Returns the content and the end offset.
fn delimited<'a>(text: &'a str, at: usize, marker: &str) -> Option<(&'a str, usize)> {
    let rest = text[at..].strip_prefix(marker)?;
    let inner_len = memchr2(b'*', b'_', rest.as_bytes()).unwrap_or(rest.len());
    if inner_len == 0 || !rest[inner_len..].starts_with(marker) {
        return None;
    }
    Some((&rest[..inner_len], at + marker.len() * 2 + inner_len))
}
