//! Image and link rewriting.
//!
//! `![alt](src)` and `[text](href)`. The bracketed part may not contain
//! `]`; the destination may not contain `)` or whitespace; neither may be
//! empty. Image runs first because its syntax contains a link's.

use std::borrow::Cow;

use memchr::memchr;

use super::rewrite_matches;

/// A bracketed label followed by a parenthesised destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkParts<'a> {
    pub label: &'a str,
    pub dest: &'a str,
    /// Offset just past the closing `)`.
    pub end: usize,
}

/// Parse `[label](dest)` with the `[` at `at`.
pub fn parse_link(text: &str, at: usize) -> Option<LinkParts<'_>> {
    let rest = text.get(at..)?.strip_prefix('[')?;
    let label_len = memchr(b']', rest.as_bytes())?;
    if label_len == 0 {
        return None;
    }
    let label = &rest[..label_len];

    let after = rest[label_len + 1..].strip_prefix('(')?;
    let dest_len = after.find(|c: char| c == ')' || c.is_whitespace())?;
    if dest_len == 0 || !after[dest_len..].starts_with(')') {
        return None;
    }
    let dest = &after[..dest_len];

    // '[' + label + "](" + dest + ')'
    let end = at + 1 + label_len + 2 + dest_len + 1;
    Some(LinkParts { label, dest, end })
}

/// `![alt](src)` → `<img src="src" alt="alt">`
pub fn rewrite_images(text: &str) -> Cow<'_, str> {
    rewrite_matches(
        text,
        |bytes| memchr(b'!', bytes),
        |text, at, out| {
            let parts = parse_link(text, at + 1)?;
            out.push_str("<img src=\"");
            out.push_str(parts.dest);
            out.push_str("\" alt=\"");
            out.push_str(parts.label);
            out.push_str("\">");
            Some(parts.end)
        },
    )
}

/// `[text](href)` → `<a href="href">text</a>`
pub fn rewrite_links(text: &str) -> Cow<'_, str> {
    rewrite_matches(
        text,
        |bytes| memchr(b'[', bytes),
        |text, at, out| {
            let parts = parse_link(text, at)?;
            out.push_str("<a href=\"");
            out.push_str(parts.dest);
            out.push_str("\">");
            out.push_str(parts.label);
            out.push_str("</a>");
            Some(parts.end)
        },
    )
}
