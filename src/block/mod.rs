//! Block-level classification.
//!
//! The classifier is line-oriented and recognises:
//! - Thematic breaks
//! - Headings
//! - Blockquotes
//! - Unordered and ordered lists
//! - Fenced code blocks
//! - Paragraphs

mod classifier;
mod element;
pub mod pattern;

pub use classifier::{classify, classify_document, split_lines, Classifier, LineRule, LINE_RULES};
pub use element::{Block, BulletSign, OrderedDelimiter};
