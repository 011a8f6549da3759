//! Placeholder stashing.
//!
//! Rendered fragments are parked in an ordered stash and stand in the
//! text as `\0<index>\0`. No inline pattern matches NUL, so a token
//! passes through every rewrite untouched until `restore`.

use std::borrow::Cow;

use memchr::memchr;
use smallvec::SmallVec;

const SENTINEL: char = '\u{0}';

/// Ordered store of stashed HTML fragments, addressed by index.
#[derive(Debug, Default)]
pub struct Stash {
    entries: SmallVec<[String; 4]>,
}

impl Stash {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Stash `html` and write its token into `out`.
    pub fn push_into(&mut self, html: String, out: &mut String) {
        let index = self.len();
        self.entries.push(html);
        out.push(SENTINEL);
        out.push_str(&index.to_string());
        out.push(SENTINEL);
    }

    /// Substitute every token with its stashed fragment in one pass.
    ///
    /// Tokens whose index is not in the stash are left as they are.
    pub fn restore<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.is_empty() {
            return Cow::Borrowed(text);
        }

        let bytes = text.as_bytes();
        let mut out = String::with_capacity(text.len() + self.entries.iter().map(String::len).sum::<usize>());
        let mut copied = 0;
        let mut pos = 0;

        while let Some(offset) = memchr(0, &bytes[pos..]) {
            let open = pos + offset;
            let digits = bytes[open + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
            let close = open + 1 + digits;

            let fragment = (digits > 0 && bytes.get(close) == Some(&0))
                .then(|| text[open + 1..close].parse::<usize>().ok())
                .flatten()
                .and_then(|index| self.get(index));

            match fragment {
                Some(html) => {
                    out.push_str(&text[copied..open]);
                    out.push_str(html);
                    copied = close + 1;
                    pos = close + 1;
                }
                None => pos = open + 1,
            }
        }

        out.push_str(&text[copied..]);
        Cow::Owned(out)
    }
}
