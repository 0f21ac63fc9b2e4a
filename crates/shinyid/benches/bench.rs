use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use shinyid::{MAX_LEN, ShinyId};

// Number of values processed per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn ids() -> Vec<u64> {
    // spread across every output length, 1 through 11 characters
    (0..TOTAL_IDS as u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> (i % 64))
        .collect()
}

/// Single worst-case value: `u64::MAX` and its 11-character shiny.
fn bench_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("max");

    group.bench_function("shiny/encode_to_buf", |b| {
        let mut buf = [0; MAX_LEN];
        b.iter(|| {
            black_box(shinyid::encode_to_buf(black_box(u64::MAX), &mut buf));
        });
    });
    group.bench_function("shiny/encode", |b| {
        b.iter(|| black_box(shinyid::encode(black_box(u64::MAX))));
    });
    group.bench_function("shiny/formatter", |b| {
        b.iter(|| black_box(ShinyId::from_raw(black_box(u64::MAX)).encode()));
    });
    group.bench_function("shiny/decode", |b| {
        b.iter(|| black_box(shinyid::decode(black_box("P__________"))));
    });

    // baseline: the same value as decimal text
    group.bench_function("decimal/format", |b| {
        b.iter(|| black_box(black_box(u64::MAX).to_string()));
    });
    group.bench_function("decimal/parse", |b| {
        b.iter(|| black_box(black_box("18446744073709551615").parse::<u64>()));
    });

    group.finish();
}

/// Mixed-length batch, closer to a stream of real IDs.
fn bench_batch(c: &mut Criterion) {
    let raw = ids();
    let encoded: Vec<String> = raw.iter().map(|&id| shinyid::encode(id)).collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("encode/elems/{TOTAL_IDS}"), |b| {
        let mut buf = [0; MAX_LEN];
        b.iter(|| {
            for &id in &raw {
                black_box(shinyid::encode_to_buf(id, &mut buf));
            }
        });
    });
    group.bench_function(format!("decode/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for s in &encoded {
                black_box(shinyid::decode(s).ok());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_max, bench_batch);
criterion_main!(benches);
