//! Property-based tests for the converter
//!
//! Any input must convert without panicking, and a handful of structural
//! guarantees must hold for generated documents.

use md2html::escape::escape_html;
use md2html::{classify_document, to_html, to_html_with_options, Block, Options};
use proptest::prelude::*;

/// A line of printable ASCII that does not start a fence.
fn code_line_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,24}".prop_filter("fence line", |line| !line.starts_with("```"))
}

/// Lowercase words separated by single spaces.
fn plain_line_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}( [a-z]{1,8}){0,3}"
}

proptest! {
    #[test]
    fn test_any_input_converts(input in any::<String>()) {
        let _ = to_html(&input);
    }

    #[test]
    fn test_any_input_wraps_once(input in any::<String>()) {
        let options = Options { full_document: true, ..Options::default() };
        let html = to_html_with_options(&input, &options);
        prop_assert!(html.starts_with("<!DOCTYPE html>"));
        prop_assert!(html.ends_with("</body>\n</html>"));
    }

    #[test]
    fn test_markdown_like_input_converts(input in "[-#>*_`\\[\\]()!0-9. a-z\n]{0,200}") {
        let _ = to_html(&input);
        let options = Options { escape_text: true, code_lang_class: true, ..Options::default() };
        let _ = to_html_with_options(&input, &options);
    }

    #[test]
    fn test_at_most_one_block_per_line(input in "[-#>*`0-9. a-z\n]{0,120}") {
        let lines = input.split('\n').count();
        prop_assert!(classify_document(&input).len() <= lines);
    }

    #[test]
    fn test_fenced_lines_are_verbatim(lines in prop::collection::vec(code_line_strategy(), 0..8)) {
        let input = format!("```\n{}\n```", lines.join("\n"));
        let expected = if lines.is_empty() { vec![String::new()] } else { lines.clone() };
        prop_assert_eq!(
            classify_document(&input),
            vec![Block::Code { lang: String::new(), items: expected }]
        );
    }

    #[test]
    fn test_plain_lines_join_into_one_paragraph(
        lines in prop::collection::vec(plain_line_strategy(), 1..6)
    ) {
        let html = to_html(&lines.join("\n"));
        prop_assert_eq!(html, format!("<p>{}</p>\n", lines.join(" ")));
    }

    #[test]
    fn test_escape_output_alphabet(input in any::<String>()) {
        let escaped = escape_html(&input);
        prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
        for (i, _) in escaped.match_indices('&') {
            let rest = &escaped[i..];
            prop_assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
                    .iter()
                    .any(|entity| rest.starts_with(entity)),
                "bare ampersand in {}",
                escaped
            );
        }
    }

    #[test]
    fn test_escape_identity_without_specials(input in "[^&<>\"']{0,64}") {
        prop_assert_eq!(escape_html(&input), input.as_str());
    }
}
