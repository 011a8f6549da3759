//! Line classifier.
//!
//! A single forward pass over the lines of a document. At most one block
//! is open at a time; everything before it is finished and never touched
//! again.

use super::element::Block;
use super::pattern;

/// A named step of the per-line decision procedure.
///
/// `apply` returns true when it consumed the line.
#[derive(Clone, Copy)]
pub struct LineRule {
    pub name: &'static str,
    pub apply: fn(&mut Classifier, &str) -> bool,
}

/// Line rules in precedence order. The first rule that consumes a line
/// wins, so a line that reads as both a heading and a list item is a
/// heading. The last rule always consumes.
///
/// Lines inside an open code fence never reach this table.
pub const LINE_RULES: &[LineRule] = &[
    LineRule { name: "blank", apply: Classifier::blank_line },
    LineRule { name: "thematic-break", apply: Classifier::thematic_break },
    LineRule { name: "heading", apply: Classifier::heading },
    LineRule { name: "quote", apply: Classifier::quote },
    LineRule { name: "unordered-list", apply: Classifier::unordered_item },
    LineRule { name: "ordered-list", apply: Classifier::ordered_item },
    LineRule { name: "code-fence", apply: Classifier::code_fence },
    LineRule { name: "paragraph", apply: Classifier::continuation },
];

/// Block classifier state.
#[derive(Debug, Default)]
pub struct Classifier {
    /// The block being accumulated, if any.
    open: Option<Block>,
    /// Finished blocks in document order.
    blocks: Vec<Block>,
    /// 1-based number of the line being classified.
    line_no: usize,
}

impl Classifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one line.
    pub fn push_line(&mut self, line: &str) {
        self.line_no += 1;

        if matches!(self.open, Some(Block::Code { .. })) {
            self.code_line(line);
            return;
        }

        for rule in LINE_RULES {
            if (rule.apply)(self, line) {
                log::trace!("line {}: {}", self.line_no, rule.name);
                return;
            }
        }
    }

    /// Flush the open block and return all blocks.
    pub fn finish(mut self) -> Vec<Block> {
        if let Some(Block::Code { .. }) = &self.open {
            log::debug!("code fence still open at end of input");
        }
        self.flush();
        self.blocks
    }

    /// Line inside a code fence: either the closing fence or a literal.
    fn code_line(&mut self, line: &str) {
        if pattern::is_fence_close(line) {
            log::trace!("line {}: code-fence close", self.line_no);
            self.flush();
            return;
        }
        if let Some(Block::Code { items, .. }) = &mut self.open {
            items.push(line.to_owned());
        }
    }

    fn blank_line(&mut self, line: &str) -> bool {
        if !pattern::is_blank(line) {
            return false;
        }
        self.flush();
        true
    }

    fn thematic_break(&mut self, line: &str) -> bool {
        if !pattern::is_thematic_break(line) {
            return false;
        }
        self.emit(Block::Delimiter);
        true
    }

    fn heading(&mut self, line: &str) -> bool {
        let Some(m) = pattern::heading(line) else {
            return false;
        };
        self.emit(Block::Heading {
            level: m.level,
            content: m.content.to_owned(),
        });
        true
    }

    fn quote(&mut self, line: &str) -> bool {
        let Some(text) = pattern::quote(line) else {
            return false;
        };
        match &mut self.open {
            Some(open @ Block::Quote { .. }) => {
                open.continue_with(text);
            }
            _ => self.open_block(Block::Quote {
                content: text.to_owned(),
            }),
        }
        true
    }

    fn unordered_item(&mut self, line: &str) -> bool {
        let Some(m) = pattern::bullet(line) else {
            return false;
        };
        match &mut self.open {
            Some(Block::UList { sign, items }) if *sign == m.sign => {
                items.push(m.content.to_owned());
            }
            _ => self.open_block(Block::UList {
                sign: m.sign,
                items: vec![m.content.to_owned()],
            }),
        }
        true
    }

    fn ordered_item(&mut self, line: &str) -> bool {
        let Some(m) = pattern::ordered(line) else {
            return false;
        };
        match &mut self.open {
            // Later numerals are not checked against the first
            Some(Block::OList { delimiter, items, .. }) if *delimiter == m.delimiter => {
                items.push(m.content.to_owned());
            }
            _ => self.open_block(Block::OList {
                start: m.number,
                delimiter: m.delimiter,
                items: vec![m.content.to_owned()],
            }),
        }
        true
    }

    fn code_fence(&mut self, line: &str) -> bool {
        let Some(lang) = pattern::fence_open(line) else {
            return false;
        };
        self.open_block(Block::Code {
            lang: lang.to_owned(),
            items: Vec::new(),
        });
        true
    }

    /// Fallback: plain text joins the open text, quote or list block,
    /// otherwise it starts a paragraph.
    fn continuation(&mut self, line: &str) -> bool {
        let text = line.trim();
        let absorbed = self
            .open
            .as_mut()
            .is_some_and(|open| open.continue_with(text));
        if !absorbed {
            self.open_block(Block::Text {
                content: text.to_owned(),
            });
        }
        true
    }

    /// Flush, then push a block that never accumulates.
    fn emit(&mut self, block: Block) {
        self.flush();
        log::debug!("line {}: {} block", self.line_no, block.kind());
        self.blocks.push(block);
    }

    /// Flush, then make `block` the open block.
    fn open_block(&mut self, block: Block) {
        self.flush();
        self.open = Some(block);
    }

    /// Close the open block, if any.
    fn flush(&mut self) {
        if let Some(block) = self.open.take() {
            log::debug!("line {}: {} block", self.line_no, block.kind());
            self.blocks.push(block);
        }
    }
}

/// Split a document into lines on `\n` and `\r\n`.
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Classify an ordered sequence of lines into blocks.
pub fn classify<'a, I>(lines: I) -> Vec<Block>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut classifier = Classifier::new();
    for line in lines {
        classifier.push_line(line);
    }
    classifier.finish()
}

/// Byte order mark, kept at the start of text read from UTF-8 files.
const BOM: char = '\u{FEFF}';

/// Split and classify a whole document. A leading byte order mark is
/// dropped.
pub fn classify_document(input: &str) -> Vec<Block> {
    let input = input.strip_prefix(BOM).unwrap_or(input);
    classify(split_lines(input))
}
