//! md2html CLI

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

mod cli;
use cli::{Cli, Source};

fn read_source(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}

fn main() -> io::Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.options();

    let input = match cli.into_source() {
        Some(Source::Text(text)) => text,
        Some(Source::File(path)) => match read_source(&path) {
            Ok(text) => {
                log::debug!("read {} bytes from {}", text.len(), path.display());
                text
            }
            Err(err) => {
                eprintln!("error: failed to read file \"{}\": {}", path.display(), err);
                return Ok(ExitCode::FAILURE);
            }
        },
        // The source group is required, so clap has already exited
        None => return Ok(ExitCode::from(2)),
    };

    let html = md2html::to_html_with_options(&input, &options);

    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
