//! Block element types.

/// Bullet character of an unordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletSign {
    /// `-`
    Dash,
    /// `+`
    Plus,
    /// `*`
    Star,
}

impl BulletSign {
    /// Map a marker byte to its sign.
    #[inline]
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'-' => Some(Self::Dash),
            b'+' => Some(Self::Plus),
            b'*' => Some(Self::Star),
            _ => None,
        }
    }
}

/// Delimiter following the numeral of an ordered list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderedDelimiter {
    /// `1.`
    Period,
    /// `1)`
    Paren,
}

impl OrderedDelimiter {
    #[inline]
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'.' => Some(Self::Period),
            b')' => Some(Self::Paren),
            _ => None,
        }
    }
}

/// A classified block of the document.
///
/// Content fields hold trimmed source text joined with single spaces.
/// Nothing here is escaped or inline-processed yet; that happens at
/// render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A paragraph.
    Text { content: String },

    /// A single-line heading.
    Heading {
        /// Heading level (1-6).
        level: u8,
        content: String,
    },

    /// Consecutive `>` lines and their lazy continuations.
    Quote { content: String },

    /// Unordered list; every item shares `sign`.
    UList { sign: BulletSign, items: Vec<String> },

    /// Ordered list; every item shares `delimiter`.
    OList {
        /// Numeral of the first item.
        start: u32,
        delimiter: OrderedDelimiter,
        items: Vec<String>,
    },

    /// Fenced code block. `items` are the raw lines, untrimmed.
    Code { lang: String, items: Vec<String> },

    /// Thematic break.
    Delimiter,
}

impl Block {
    /// Short name used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Heading { .. } => "heading",
            Self::Quote { .. } => "quote",
            Self::UList { .. } => "ulist",
            Self::OList { .. } => "olist",
            Self::Code { .. } => "code",
            Self::Delimiter => "delimiter",
        }
    }

    /// Append a plain continuation line, if this block accepts one.
    ///
    /// Text and quotes grow their content; lists grow their last item.
    /// Returns false for blocks that never absorb plain lines.
    pub(crate) fn continue_with(&mut self, line: &str) -> bool {
        match self {
            Self::Text { content } | Self::Quote { content } => {
                push_joined(content, line);
                true
            }
            Self::UList { items, .. } | Self::OList { items, .. } => match items.last_mut() {
                Some(last) => {
                    push_joined(last, line);
                    true
                }
                None => false,
            },
            Self::Heading { .. } | Self::Code { .. } | Self::Delimiter => false,
        }
    }
}

#[inline]
fn push_joined(content: &mut String, line: &str) {
    content.push(' ');
    content.push_str(line);
}
