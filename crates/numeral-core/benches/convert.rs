use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numeral_core::{decode, decode_with, encode, DecodeOptions, MAX_VALUE, MIN_VALUE};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for n in [1u32, 1984, 3888] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| encode(black_box(n)))
        });
    }
    group.finish();

    c.bench_function("encode_full_range", |b| {
        b.iter(|| {
            for n in MIN_VALUE..=MAX_VALUE {
                let _ = encode(black_box(n));
            }
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for roman in ["I", "MCMLXXXIV", "MMMDCCCLXXXVIII"] {
        group.bench_with_input(BenchmarkId::new("strict", roman), roman, |b, roman| {
            b.iter(|| decode(black_box(roman)))
        });
        group.bench_with_input(BenchmarkId::new("additive", roman), roman, |b, roman| {
            b.iter(|| decode_with(black_box(roman), &DecodeOptions::additive()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
