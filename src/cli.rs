use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "md2html")]
#[command(author, version)]
#[command(about = "Convert Markdown to HTML")]
#[command(after_help = "\
EXAMPLES:

    # Convert inline text
    md2html '# Hello **world**'

    # Convert a file to a standalone page
    md2html --wrap -f README.md > README.html

    # Convert from stdin
    cat notes.md | md2html -f -")]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["input", "file"])
))]
pub struct Cli {
    /// Markdown text to convert
    pub input: Option<String>,

    /// Read Markdown from a file (`-` for stdin)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Wrap the output in a standalone HTML document
    #[arg(short, long)]
    pub wrap: bool,

    /// Escape HTML-special characters in text outside code
    #[arg(long)]
    pub escape_text: bool,

    /// Add a language-TAG class to tagged code blocks
    #[arg(long)]
    pub lang_class: bool,
}

/// Where the Markdown comes from.
#[derive(Debug, PartialEq, Eq)]
pub enum Source {
    Text(String),
    File(PathBuf),
}

impl Cli {
    /// Move the chosen source out of the parsed arguments.
    pub fn into_source(self) -> Option<Source> {
        match (self.input, self.file) {
            (Some(text), _) => Some(Source::Text(text)),
            (None, Some(path)) => Some(Source::File(path)),
            (None, None) => None,
        }
    }

    pub fn options(&self) -> md2html::Options {
        md2html::Options {
            full_document: self.wrap,
            escape_text: self.escape_text,
            code_lang_class: self.lang_class,
        }
    }
}
