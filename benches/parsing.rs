//! Performance benchmarks for md2html
//!
//! Run with: cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Sample Markdown documents of various sizes
mod samples {
    pub const TINY: &str = "Hello, **world**!";

    pub const SMALL: &str = r#"# Heading

This is a paragraph with *emphasis* and **strong** text.

- Item 1
- Item 2
- Item 3

`inline code` and [a link](https://example.com).
"#;

    pub const MEDIUM: &str = r#"# Project README

This is a sample README file that demonstrates the supported syntax.

## Features

- Line-oriented parsing
- Code span stashing
- Optional page template

### Code Example

```rust
fn main() {
    println!("Hello, world!");
}
```

## Usage

The converter handles **bold**, *italic* and ***both*** in one pass each.

> This is a blockquote with some *emphasized* text.

1. [GitHub](https://github.com)
2. [Documentation](https://docs.rs)

---

Thank you for reading! ![badge](https://example.com/badge.svg)
"#;

    /// Generate a large document by repeating sections
    pub fn large() -> String {
        let section = r#"
## Section Title

This paragraph contains various inline elements like *emphasis*, **strong**,
`code`, and [links](https://example.com).

- First bullet point with **bold** text
- Second bullet point with *italic* text
- Third point with `code`

> A blockquote that spans
> multiple lines.

```rust
fn example() {
    let x = 42;
    println!("{}", x);
}
```

Another paragraph to add some content. This helps test the converter's
ability to handle longer documents efficiently.

"#;
        section.repeat(50)
    }

    /// Many unmatched emphasis markers
    pub fn pathological_emphasis() -> String {
        "*a ".repeat(1000) + &"b* ".repeat(1000)
    }

    /// Long runs of backticks with no closer
    pub fn pathological_code_spans() -> String {
        "`` a ".repeat(2000)
    }
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for (name, input) in [
        ("tiny", samples::TINY),
        ("small", samples::SMALL),
        ("medium", samples::MEDIUM),
    ] {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| b.iter(|| md2html::to_html(black_box(input))));
    }

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| {
        b.iter(|| md2html::to_html(black_box(&large)))
    });

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));

    group.bench_function("classify", |b| {
        b.iter(|| md2html::classify_document(black_box(&large)))
    });

    let blocks = md2html::classify_document(&large);
    group.bench_function("render", |b| b.iter(|| md2html::render(black_box(&blocks))));

    group.finish();
}

fn bench_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escaping");

    // Plain text (no escaping needed)
    let plain = "Hello, this is plain text without any special characters. ".repeat(100);
    group.throughput(Throughput::Bytes(plain.len() as u64));
    group.bench_function("plain_text", |b| {
        b.iter(|| {
            let mut out = String::with_capacity(plain.len());
            md2html::escape::escape_html_into(&mut out, black_box(&plain));
            out
        })
    });

    // Text with HTML that needs escaping
    let html_heavy = "<script>alert('xss')</script> & more <tags> here! ".repeat(100);
    group.throughput(Throughput::Bytes(html_heavy.len() as u64));
    group.bench_function("html_heavy", |b| {
        b.iter(|| {
            let mut out = String::with_capacity(html_heavy.len() * 2);
            md2html::escape::escape_html_into(&mut out, black_box(&html_heavy));
            out
        })
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20); // Fewer samples for slow cases

    let emphasis = samples::pathological_emphasis();
    group.throughput(Throughput::Bytes(emphasis.len() as u64));
    group.bench_function("emphasis_unmatched", |b| {
        b.iter(|| md2html::to_html(black_box(&emphasis)))
    });

    let code_spans = samples::pathological_code_spans();
    group.throughput(Throughput::Bytes(code_spans.len() as u64));
    group.bench_function("code_span_runs", |b| {
        b.iter(|| md2html::to_html(black_box(&code_spans)))
    });

    group.finish();
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");

    let input = samples::MEDIUM;
    group.throughput(Throughput::Bytes(input.len() as u64));

    // Without buffer reuse
    group.bench_function("without_reuse", |b| {
        b.iter(|| md2html::to_html(black_box(input)))
    });

    // With buffer reuse
    group.bench_function("with_reuse", |b| {
        let mut buffer = String::with_capacity(input.len() * 2);
        b.iter(|| {
            buffer.clear();
            md2html::to_html_into(black_box(input), &mut buffer);
            black_box(&buffer);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parsing,
    bench_stages,
    bench_escaping,
    bench_pathological,
    bench_buffer_reuse
);
criterion_main!(benches);
