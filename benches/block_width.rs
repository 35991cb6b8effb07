//! Printing throughput per block width, against the digit-by-digit baseline (width 0).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use radix_blocks::sweep::DEFAULT_RANGES;
use radix_blocks::IntegerPrinter;

/// Deterministic mix of magnitudes and signs
fn generate_integers(count: usize) -> Vec<i64> {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    (0..count)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let n = (state >> (i % 60)) as i64;
            if i % 3 == 0 { n.wrapping_neg() } else { n }
        })
        .collect()
}

fn bench_block_width(c: &mut Criterion) {
    let integers = generate_integers(10_000);
    let mut out = Vec::with_capacity(integers.len() * 66);

    for range in DEFAULT_RANGES.iter() {
        let mut group = c.benchmark_group(format!("radix_{}", range.radix));
        group.throughput(Throughput::Elements(integers.len() as u64));

        for width in range.widths() {
            let mut printer = IntegerPrinter::new(range.radix, width).unwrap();
            group.bench_with_input(BenchmarkId::from_parameter(width), &integers, |b, integers| {
                b.iter(|| {
                    out.clear();
                    printer.print(&mut out, black_box(integers)).unwrap();
                    black_box(out.len())
                })
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_block_width);
criterion_main!(benches);
