//! Criterion benchmarks for the raskladka library.
//!
//! Covers the two hot paths:
//! - Homoglyph typo correction over texts of growing size
//! - Keyboard layout conversion

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use raskladka::{Layout, convert, convert_auto, correct, extract_words};
use std::hint::black_box;

/// Build a text of `sentences` repetitions of a sentence that exercises
/// every corrector path: homoglyph typos in both directions, a glued
/// bilingual token and clean words of both scripts.
fn generate_mixed_text(sentences: usize) -> String {
    let sentence = "Зайди в Gооgle, набери сode, открой двepь в sportзал и wait. ";
    sentence.repeat(sentences)
}

fn bench_correct(c: &mut Criterion) {
    let mut group = c.benchmark_group("correct");

    for sentences in [1, 16, 256] {
        let text = generate_mixed_text(sentences);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("mixed_{sentences}_sentences"), |b| {
            b.iter(|| correct(black_box(&text)).unwrap())
        });
    }

    // Clean text measures the cost of scanning without rewriting.
    let clean = "обычный русский текст без единой опечатки ".repeat(64);
    group.throughput(Throughput::Bytes(clean.len() as u64));
    group.bench_function("clean_cyrillic", |b| {
        b.iter(|| correct(black_box(&clean)).unwrap())
    });

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    let latin = "ghbdtn vbh? rfr ltkf - [jhjij ".repeat(64);
    group.throughput(Throughput::Bytes(latin.len() as u64));
    group.bench_function("latin_to_cyrillic", |b| {
        b.iter(|| convert(black_box(&latin), Layout::Latin, Layout::Cyrillic).unwrap())
    });

    group.bench_function("auto_detect", |b| {
        b.iter(|| convert_auto(black_box(&latin)))
    });

    group.finish();
}

fn bench_extract_words(c: &mut Criterion) {
    let text = "— привет, world! 100% ghbdtn? во-первых ".repeat(64);
    let mut group = c.benchmark_group("extract_words");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("mixed_text", |b| {
        b.iter(|| extract_words(black_box(&text)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_correct, bench_convert, bench_extract_words);
criterion_main!(benches);
