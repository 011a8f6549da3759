//! HTML rendering of classified blocks.
//!
//! One block at a time, in order, each followed by a newline. Line
//! content goes through the inline processor; code block lines are only
//! escaped.

use crate::block::pattern::MAX_HEADING_LEVEL;
use crate::block::Block;
use crate::escape;
use crate::inline::InlineParser;
use crate::Options;

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use md2html::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.paragraph_start();
/// writer.write_escaped_text("Hello <World>");
/// writer.paragraph_end();
///
/// assert_eq!(writer.into_string(), "<p>Hello &lt;World&gt;</p>\n");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Write a string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write text with HTML escaping.
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        escape::escape_html_into(&mut self.out, text);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Take ownership of the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Get mutable reference to internal buffer.
    ///
    /// Use with caution - allows bypassing escaping.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.out
    }

    // --- Block Elements ---

    /// `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str("<p>");
    }

    /// `</p>\n`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>\n");
    }

    /// `<hN>`, with N clamped to 1-6.
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        self.write_str("<h");
        self.write_u32(heading_level(level));
        self.out.push('>');
    }

    /// `</hN>\n`, with N clamped to 1-6.
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        self.write_str("</h");
        self.write_u32(heading_level(level));
        self.write_str(">\n");
    }

    /// `<hr>\n`
    #[inline]
    pub fn thematic_break(&mut self) {
        self.write_str("<hr>\n");
    }

    /// `<blockquote>`
    #[inline]
    pub fn blockquote_start(&mut self) {
        self.write_str("<blockquote>");
    }

    /// `</blockquote>\n`
    #[inline]
    pub fn blockquote_end(&mut self) {
        self.write_str("</blockquote>\n");
    }

    /// `<ul>\n`
    #[inline]
    pub fn ul_start(&mut self) {
        self.write_str("<ul>\n");
    }

    /// `</ul>\n`
    #[inline]
    pub fn ul_end(&mut self) {
        self.write_str("</ul>\n");
    }

    /// `<ol start="N">\n`, always carrying the start.
    #[inline]
    pub fn ol_start(&mut self, start: u32) {
        self.write_str("<ol start=\"");
        self.write_u32(start);
        self.write_str("\">\n");
    }

    /// `</ol>\n`
    #[inline]
    pub fn ol_end(&mut self) {
        self.write_str("</ol>\n");
    }

    /// Indented `<li>`
    #[inline]
    pub fn li_start(&mut self) {
        self.write_str("  <li>");
    }

    /// `</li>\n`
    #[inline]
    pub fn li_end(&mut self) {
        self.write_str("</li>\n");
    }

    /// `<pre>\n`, or `<pre class="language-TAG">\n` when a tag is given.
    #[inline]
    pub fn code_block_start(&mut self, lang: Option<&str>) {
        match lang {
            Some(l) if !l.is_empty() => {
                self.write_str("<pre class=\"language-");
                self.write_escaped_text(l);
                self.write_str("\">\n");
            }
            _ => self.write_str("<pre>\n"),
        }
    }

    /// One literal line: `<code>escaped</code>`
    #[inline]
    pub fn code_line(&mut self, line: &str) {
        self.write_str("<code>");
        self.write_escaped_text(line);
        self.write_str("</code>");
    }

    /// `\n</pre>\n`
    #[inline]
    pub fn code_block_end(&mut self) {
        self.write_str("\n</pre>\n");
    }

    fn write_u32(&mut self, n: u32) {
        let mut buf = [0u8; 10]; // Max digits for u32
        let mut i = buf.len();
        let mut n = n;
        loop {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for &digit in &buf[i..] {
            self.out.push(char::from(digit));
        }
    }
}

#[inline]
fn heading_level(level: u8) -> u32 {
    u32::from(level).clamp(1, MAX_HEADING_LEVEL as u32)
}

/// Render blocks with default options.
pub fn render(blocks: &[Block]) -> String {
    render_with_options(blocks, &Options::default())
}

/// Render blocks to an HTML body fragment.
pub fn render_with_options(blocks: &[Block], options: &Options) -> String {
    let mut writer = HtmlWriter::new();
    render_to_writer(blocks, &mut writer, options);
    writer.into_string()
}

/// Render blocks, appending to `writer`.
pub fn render_to_writer(blocks: &[Block], writer: &mut HtmlWriter, options: &Options) {
    let mut inline = InlineParser::new().with_escape_text(options.escape_text);
    for block in blocks {
        render_block(block, writer, &mut inline, options);
    }
}

/// Render a single block.
fn render_block(block: &Block, writer: &mut HtmlWriter, inline: &mut InlineParser, options: &Options) {
    match block {
        Block::Text { content } => {
            writer.paragraph_start();
            writer.write_str(&inline.parse(content));
            writer.paragraph_end();
        }
        Block::Heading { level, content } => {
            writer.heading_start(*level);
            writer.write_str(&inline.parse(content));
            writer.heading_end(*level);
        }
        Block::Delimiter => writer.thematic_break(),
        Block::Quote { content } => {
            writer.blockquote_start();
            writer.write_str(&inline.parse(content));
            writer.blockquote_end();
        }
        Block::UList { items, .. } => {
            writer.ul_start();
            render_items(items, writer, inline);
            writer.ul_end();
        }
        Block::OList { start, items, .. } => {
            writer.ol_start(*start);
            render_items(items, writer, inline);
            writer.ol_end();
        }
        Block::Code { lang, items } => {
            let lang = options.code_lang_class.then_some(lang.as_str());
            writer.code_block_start(lang);
            for (i, line) in items.iter().enumerate() {
                if i > 0 {
                    writer.newline();
                }
                writer.code_line(line);
            }
            writer.code_block_end();
        }
    }
}

fn render_items(items: &[String], writer: &mut HtmlWriter, inline: &mut InlineParser) {
    for item in items {
        writer.li_start();
        writer.write_str(&inline.parse(item));
        writer.li_end();
    }
}
