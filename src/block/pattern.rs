//! Line-level patterns.
//!
//! Each function inspects exactly one line and either recognises its
//! construct or returns `None`. None of them look at neighbouring lines;
//! continuation is the classifier's business.

use crate::cursor::Cursor;

use super::element::{BulletSign, OrderedDelimiter};

/// Deepest heading level.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Minimum marker count for a thematic break.
pub const MIN_THEMATIC_BREAK_MARKERS: usize = 3;

/// Code fence delimiter.
pub const FENCE: &str = "```";

/// A recognised heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    pub level: u8,
    pub content: &'a str,
}

/// A recognised unordered list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletLine<'a> {
    pub sign: BulletSign,
    pub content: &'a str,
}

/// A recognised ordered list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedLine<'a> {
    pub number: u32,
    pub delimiter: OrderedDelimiter,
    pub content: &'a str,
}

/// Empty or whitespace-only line.
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Three or more of one of `*`, `-`, `_`, optionally separated by whitespace.
pub fn is_thematic_break(line: &str) -> bool {
    let mut cursor = Cursor::new(line);
    cursor.skip_whitespace();

    let marker = match cursor.peek() {
        Some(b @ (b'*' | b'-' | b'_')) => b,
        _ => return false,
    };

    let mut count = 0;
    loop {
        count += cursor.eat_run(marker);
        if cursor.skip_whitespace() == 0 {
            break;
        }
    }

    cursor.is_eof() && count >= MIN_THEMATIC_BREAK_MARKERS
}

/// `#` to `######`, then whitespace or end of line.
pub fn heading(line: &str) -> Option<HeadingLine<'_>> {
    let mut cursor = Cursor::new(line);
    cursor.skip_whitespace();

    let level = cursor.eat_run(b'#');
    if level == 0 || level > MAX_HEADING_LEVEL || !cursor.at_boundary() {
        return None;
    }

    Some(HeadingLine {
        level: level as u8,
        content: cursor.rest().trim(),
    })
}

/// `>` in the first column. Returns the trimmed quote text.
pub fn quote(line: &str) -> Option<&str> {
    let mut cursor = Cursor::new(line);
    if !cursor.eat(b'>') {
        return None;
    }
    Some(cursor.rest().trim())
}

/// `-`, `+` or `*`, then whitespace or end of line.
pub fn bullet(line: &str) -> Option<BulletLine<'_>> {
    let mut cursor = Cursor::new(line);
    cursor.skip_whitespace();

    let sign = BulletSign::from_byte(cursor.peek()?)?;
    cursor.bump();
    if !cursor.at_boundary() {
        return None;
    }

    Some(BulletLine {
        sign,
        content: cursor.rest().trim(),
    })
}

/// Digits, then `.` or `)`, then whitespace or end of line. The numeral
/// must fit in `u32`; leading zeros are allowed.
pub fn ordered(line: &str) -> Option<OrderedLine<'_>> {
    let mut cursor = Cursor::new(line);
    cursor.skip_whitespace();

    let digits_start = cursor.offset();
    let digits = cursor.skip_while(|b| b.is_ascii_digit());
    if digits == 0 {
        return None;
    }
    let numeral = &line[digits_start..cursor.offset()];

    let delimiter = OrderedDelimiter::from_byte(cursor.peek()?)?;
    cursor.bump();
    if !cursor.at_boundary() {
        return None;
    }

    // A numeral past u32::MAX is not a marker
    let number = numeral.parse().ok()?;

    Some(OrderedLine {
        number,
        delimiter,
        content: cursor.rest().trim(),
    })
}

/// Opening fence: ```` ``` ```` in the first column followed by an optional
/// language tag without backticks. Returns the trimmed tag.
pub fn fence_open(line: &str) -> Option<&str> {
    let mut cursor = Cursor::new(line);
    if !cursor.eat_str(FENCE) {
        return None;
    }
    let info = cursor.rest();
    if memchr::memchr(b'`', info.as_bytes()).is_some() {
        return None;
    }
    Some(info.trim())
}

/// Closing fence: ```` ``` ```` in the first column and nothing else but
/// whitespace.
pub fn is_fence_close(line: &str) -> bool {
    let mut cursor = Cursor::new(line);
    cursor.eat_str(FENCE) && cursor.rest().trim().is_empty()
}
