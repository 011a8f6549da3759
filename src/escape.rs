//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for the first escapable character,
//! then bulk-copies segments between escapes.
//!
//! Escaping is not idempotent. `&amp;` escapes to `&amp;amp;`, so every
//! literal must pass through here exactly once.

use std::borrow::Cow;

use memchr::{memchr2, memchr3};

/// Lookup table for the five reserved HTML characters.
/// Index by byte value, true if needs escaping.
const ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'&' as usize] = true;
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

#[inline]
fn entity(b: u8) -> &'static str {
    match b {
        b'&' => "&amp;",
        b'<' => "&lt;",
        b'>' => "&gt;",
        b'"' => "&quot;",
        b'\'' => "&#39;",
        _ => unreachable!("not an escapable byte"),
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` into an output buffer.
///
/// # Example
/// ```
/// use md2html::escape::escape_html_into;
///
/// let mut out = String::new();
/// escape_html_into(&mut out, "<a href=\"x\">");
/// assert_eq!(out, "&lt;a href=&quot;x&quot;&gt;");
/// ```
#[inline]
pub fn escape_html_into(out: &mut String, input: &str) {
    let bytes = input.as_bytes();
    let mut pos = match first_escape(bytes) {
        Some(p) => p,
        None => {
            out.push_str(input);
            return;
        }
    };

    out.reserve(input.len() + input.len() / 8);
    out.push_str(&input[..pos]);

    while pos < bytes.len() {
        // Escapable bytes are ASCII, so every cut lands on a char boundary
        let scan_start = pos;
        while pos < bytes.len() && !ESCAPE_TABLE[bytes[pos] as usize] {
            pos += 1;
        }
        if pos > scan_start {
            out.push_str(&input[scan_start..pos]);
        }
        if pos < bytes.len() {
            out.push_str(entity(bytes[pos]));
            pos += 1;
        }
    }
}

/// Escape a string, borrowing it unchanged when nothing needs escaping.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !needs_escape(input) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    escape_html_into(&mut out, input);
    Cow::Owned(out)
}

/// Check if a string contains any reserved HTML character.
#[inline]
pub fn needs_escape(input: &str) -> bool {
    first_escape(input.as_bytes()).is_some()
}

#[inline]
fn first_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'&', b'<', b'>', input);
    let b = memchr2(b'"', b'\'', input);
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
