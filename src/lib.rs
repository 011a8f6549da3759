//! md2html: a small, line-oriented Markdown to HTML converter
//!
//! The conversion runs in two stages:
//! 1. The block classifier walks the input line by line and produces a
//!    flat sequence of [`Block`]s (paragraphs, headings, quotes, lists,
//!    code fences, thematic breaks).
//! 2. The renderer turns each block into HTML, running the text of every
//!    non-code block through the inline processor (code spans, images,
//!    links, emphasis).
//!
//! # Design Principles
//! - No regex: byte-level scanning with `memchr`
//! - One forward pass per stage, no backtracking across lines
//! - Never fails: every input produces some output
//!
//! Nesting is not supported. A block never contains another block, and
//! list items hold a single line of text plus its continuations.

pub mod block;
pub mod cursor;
pub mod escape;
pub mod inline;
pub mod render;
pub mod template;

// Re-export primary types
pub use block::{classify, classify_document, Block, Classifier};
pub use inline::{parse_inline, InlineParser};
pub use render::{render, render_with_options, HtmlWriter};
pub use template::wrap_document;

/// Conversion options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Wrap the body fragment in a standalone HTML document.
    pub full_document: bool,
    /// Escape HTML-special characters in text outside code spans and
    /// code blocks. Off by default, so inline HTML passes through.
    pub escape_text: bool,
    /// Emit `class="language-TAG"` on `<pre>` for tagged code fences.
    pub code_lang_class: bool,
}

/// Convert Markdown to an HTML body fragment.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = md2html::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
///
/// # Example
/// ```
/// use md2html::Options;
///
/// let options = Options { full_document: true, ..Options::default() };
/// let html = md2html::to_html_with_options("Hi", &options);
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("<body>\n<p>Hi</p>\n</body>"));
/// ```
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut out = String::new();
    to_html_into_with_options(input, &mut out, options);
    out
}

/// Convert Markdown to HTML, appending to a provided buffer.
///
/// This avoids allocation if the buffer has sufficient capacity.
pub fn to_html_into(input: &str, out: &mut String) {
    to_html_into_with_options(input, out, &Options::default());
}

/// Convert Markdown to HTML into a provided buffer with options.
pub fn to_html_into_with_options(input: &str, out: &mut String, options: &Options) {
    let blocks = block::classify_document(input);
    log::debug!("classified {} blocks from {} bytes", blocks.len(), input.len());

    if options.full_document {
        let body = render::render_with_options(&blocks, options);
        out.push_str(&template::wrap_document(&body));
        return;
    }

    out.reserve(input.len() + input.len() / 4);
    let mut writer = HtmlWriter::default();
    // Render straight into the caller's buffer
    std::mem::swap(writer.buffer_mut(), out);
    render::render_to_writer(&blocks, &mut writer, options);
    std::mem::swap(writer.buffer_mut(), out);
}
