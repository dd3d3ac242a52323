//! Benchmarks for transcript parsing, analysis and output.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- analyze`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use love_theorem::output::{to_csv, to_json, to_report};
use love_theorem::{Analyzer, Message, ParserConfig, TranscriptParser, analyze, parse};

use chrono::{Duration, TimeZone, Utc};

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_whatsapp_txt(count: usize) -> String {
    let base = Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap();
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 3 == 0 { "Bob" } else { "Alice" };
        let ts = base + Duration::seconds(i as i64 * 97);
        let stamp = if i % 2 == 0 {
            ts.format("%-d/%-m/%Y, %-H:%M").to_string()
        } else {
            ts.format("%-d/%-m/%Y, %-I:%M %P").to_string()
        };
        let body = match i % 5 {
            0 => "haha I love that 😂".to_string(),
            1 => format!("message number {i}"),
            2 => "ugh so tired today".to_string(),
            3 => "🔥🔥".to_string(),
            _ => "ok see you soon".to_string(),
        };
        lines.push(format!("{stamp} - {sender}: {body}"));
        if i % 100 == 50 {
            lines.push("a continuation or garbage line".to_string());
        }
    }
    lines.join("\n")
}

fn generate_messages(count: usize) -> Vec<Message> {
    parse(&generate_whatsapp_txt(count))
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = TranscriptParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_whatsapp_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let messages = parser.parse(black_box(txt));
                black_box(messages)
            });
        });
    }
    group.finish();
}

fn bench_parse_joining(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_join_continuations");
    let parser =
        TranscriptParser::with_config(ParserConfig::new().with_join_continuations(true));

    for size in [1_000_usize, 10_000] {
        let txt = generate_whatsapp_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| black_box(parser.parse_with_stats(black_box(txt))));
        });
    }
    group.finish();
}

// =============================================================================
// Analysis Benchmarks
// =============================================================================

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let analyzer = Analyzer::new();

    for size in [100_usize, 1_000, 10_000, 100_000] {
        let messages = generate_messages(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &messages,
            |b, messages| {
                b.iter(|| {
                    let result = analyzer.analyze(black_box(messages)).unwrap();
                    black_box(result)
                });
            },
        );
    }
    group.finish();
}

fn bench_analyze_unsorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_unsorted");

    for size in [1_000_usize, 10_000] {
        let mut messages = generate_messages(size);
        messages.reverse();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &messages,
            |b, messages| {
                b.iter(|| black_box(analyze(black_box(messages)).unwrap()));
            },
        );
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let result = analyze(&generate_messages(10_000)).unwrap();

    group.bench_function("json", |b| b.iter(|| black_box(to_json(black_box(&result)).unwrap())));
    group.bench_function("csv", |b| b.iter(|| black_box(to_csv(black_box(&result)).unwrap())));
    group.bench_function("text", |b| b.iter(|| black_box(to_report(black_box(&result)))));
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for size in [1_000_usize, 10_000, 50_000] {
        let txt = generate_whatsapp_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                // parse -> analyze -> json
                let messages = parse(black_box(txt));
                let result = analyze(&messages).unwrap();
                black_box(to_json(&result).unwrap())
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_parse,
    bench_parse_joining,
    bench_analyze,
    bench_analyze_unsorted,
    bench_output,
    bench_full_pipeline,
);

criterion_main!(benches);
