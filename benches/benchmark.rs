//! パフォーマンスベンチマーク
//!
//! 区切り文字テキストの2つのバックエンド（基本実装と高速実装）と、
//! 固定長テキストの分割処理のスループットを測定します。

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tabparse::{CsvParser, FastCsvParser, FixedWidthParser, ParseOptions, Parser};

/// `rows`行×8列のCSVを生成
fn generate_csv(rows: usize) -> Vec<u8> {
    let mut data = String::new();
    for row in 0..rows {
        let fields: Vec<String> = (0..8).map(|col| format!("R{}C{}", row, col)).collect();
        data.push_str(&fields.join(","));
        data.push('\n');
    }
    data.into_bytes()
}

/// `rows`行×幅10の8列の固定長テキストを生成
fn generate_fixed_width(rows: usize) -> Vec<u8> {
    let mut data = String::new();
    for row in 0..rows {
        for col in 0..8 {
            data.push_str(&format!("{:<10}", format!("R{}C{}", row, col)));
        }
        data.push('\n');
    }
    data.into_bytes()
}

fn benchmark_delimited(c: &mut Criterion) {
    let data = generate_csv(10_000);
    let options = ParseOptions::new();

    let mut group = c.benchmark_group("delimited");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("csv", |b| {
        b.iter(|| CsvParser.parse(black_box(&data), &options).unwrap());
    });
    group.bench_function("fastcsv", |b| {
        b.iter(|| FastCsvParser.parse(black_box(&data), &options).unwrap());
    });

    group.finish();
}

fn benchmark_fixed_width(c: &mut Criterion) {
    let data = generate_fixed_width(10_000);
    let options = ParseOptions::new().with_widths(vec![10; 8]);

    let mut group = c.benchmark_group("fixed_width");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("split_columns", |b| {
        b.iter(|| FixedWidthParser.parse(black_box(&data), &options).unwrap());
    });

    group.finish();
}

criterion_group!(benches, benchmark_delimited, benchmark_fixed_width);
criterion_main!(benches);
