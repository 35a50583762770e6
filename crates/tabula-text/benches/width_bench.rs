//! Benchmarks for cell width and wrapping.
//!
//! Run with: cargo bench -p tabula-text

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tabula_style::TextStyle;
use tabula_text::wrap::{WrapOptions, wrap};
use tabula_text::{TextAlign, Whitespace, parse_text, str_width};

// =============================================================================
// Test Data
// =============================================================================

fn cycled(pattern: &str, len: usize) -> String {
    pattern.chars().cycle().take(len).collect()
}

fn ascii_text(len: usize) -> String {
    cycled("The quick brown fox jumps over the lazy dog. ", len)
}

fn cjk_text(len: usize) -> String {
    cycled("\u{4E2D}\u{6587}\u{6D4B}\u{8BD5}\u{6587}\u{672C}", len)
}

fn emoji_text(len: usize) -> String {
    cycled("\u{1F600}\u{1F389}\u{1F680}\u{1F4BB}\u{1F3E0}", len)
}

fn zwj_text(count: usize) -> String {
    "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}".repeat(count)
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_width(c: &mut Criterion) {
    let inputs: [(&str, fn(usize) -> String); 3] =
        [("ascii", ascii_text), ("cjk", cjk_text), ("emoji", emoji_text)];
    for (name, make) in inputs {
        let mut group = c.benchmark_group(format!("width/{name}"));
        for len in [10, 100, 1000] {
            let text = make(len);
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
                b.iter(|| black_box(str_width(text)))
            });
        }
        group.finish();
    }
}

fn bench_zwj_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("width/zwj");
    for count in [1, 10, 50] {
        let text = zwj_text(count);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| black_box(str_width(text)))
        });
    }
    group.finish();
}

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");
    let lines = parse_text(&ascii_text(4000), &TextStyle::default());
    for (name, whitespace, align) in [
        ("normal", Whitespace::NORMAL, TextAlign::None),
        ("pre_wrap", Whitespace::PRE_WRAP, TextAlign::None),
        ("justify", Whitespace::NORMAL, TextAlign::Justify),
    ] {
        let options = WrapOptions::new(60).whitespace(whitespace).align(align);
        group.bench_function(name, |b| b.iter(|| black_box(wrap(&lines, &options))));
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let styled = "\x1b[1mbold\x1b[0m \x1b[38;5;208morange\x1b[39m plain ".repeat(200);
    c.bench_function("parse/styled", |b| {
        b.iter(|| black_box(parse_text(&styled, &TextStyle::default())))
    });
}

criterion_group!(benches, bench_width, bench_zwj_width, bench_wrap, bench_parse);
criterion_main!(benches);
