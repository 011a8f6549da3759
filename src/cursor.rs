//! Forward-only cursor over a single line of text.
//!
//! Line patterns only ever look at ASCII markers, so the cursor steps in
//! bytes. Every position it stops on is either the start of the line, the
//! end of the line, or directly after an ASCII byte, which keeps slicing
//! back into the `&str` on a char boundary.

/// A cursor for scanning one line.
///
/// # Example
/// ```
/// use md2html::cursor::Cursor;
///
/// let mut cursor = Cursor::new("## Title");
/// assert_eq!(cursor.eat_run(b'#'), 2);
/// assert!(cursor.at_boundary());
/// assert_eq!(cursor.rest().trim(), "Title");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `line`.
    #[inline]
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Current byte offset from the start of the line.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Check if cursor is at end of line.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.line.as_bytes().get(self.pos).copied()
    }

    /// Check if current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Advance past one ASCII byte.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(self.peek().is_some_and(|b| b.is_ascii()));
        self.pos += 1;
    }

    /// Consume a specific ASCII byte if present.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume an ASCII prefix if present.
    #[inline]
    pub fn eat_str(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// Consume a run of one ASCII byte, returning its length.
    #[inline]
    pub fn eat_run(&mut self, b: u8) -> usize {
        self.skip_while(|c| c == b)
    }

    /// Skip ASCII bytes while predicate is true.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !b.is_ascii() || !predicate(b) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Skip leading whitespace, Unicode included.
    #[inline]
    pub fn skip_whitespace(&mut self) -> usize {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start().len();
        self.pos += skipped;
        skipped
    }

    /// True at end of line or when the next char is whitespace.
    #[inline]
    pub fn at_boundary(&self) -> bool {
        self.rest().chars().next().is_none_or(char::is_whitespace)
    }

    /// The unconsumed remainder of the line.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_new() {
        let cursor = Cursor::new("Hello");
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.rest(), "Hello");
        assert!(!cursor.is_eof());
    }

    #[test]
    fn test_cursor_empty() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
        assert!(cursor.at_boundary());
    }

    #[test]
    fn test_cursor_eat() {
        let mut cursor = Cursor::new("abc");
        assert!(cursor.eat(b'a'));
        assert!(!cursor.eat(b'a'));
        assert!(cursor.eat(b'b'));
        assert_eq!(cursor.rest(), "c");
    }

    #[test]
    fn test_cursor_eat_str() {
        let mut cursor = Cursor::new("```rust");
        assert!(cursor.eat_str("```"));
        assert_eq!(cursor.rest(), "rust");
        assert!(!cursor.eat_str("```"));
    }

    #[test]
    fn test_cursor_eat_run() {
        let mut cursor = Cursor::new("####x");
        assert_eq!(cursor.eat_run(b'#'), 4);
        assert_eq!(cursor.peek(), Some(b'x'));
    }

    #[test]
    fn test_cursor_skip_whitespace_unicode() {
        let mut cursor = Cursor::new("\u{a0} \tabc");
        cursor.skip_whitespace();
        assert_eq!(cursor.rest(), "abc");
    }

    #[test]
    fn test_cursor_stops_at_non_ascii() {
        let mut cursor = Cursor::new("aé");
        assert_eq!(cursor.skip_while(|_| true), 1);
        assert_eq!(cursor.rest(), "é");
    }

    #[test]
    fn test_cursor_at_boundary() {
        let mut cursor = Cursor::new("-x");
        cursor.bump();
        assert!(!cursor.at_boundary());

        let mut cursor = Cursor::new("- x");
        cursor.bump();
        assert!(cursor.at_boundary());
    }
}
