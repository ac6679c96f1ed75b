//! Quarter-round benchmark
use core::hint::black_box;

use benches::{Benchmarker, criterion_group_bench};
use criterion::{BenchmarkId, Throughput, criterion_main};
use quarter_round::{STATE_WORDS, State, quarter_round, quarter_round_at};

const WORD_BYTES: usize = 4;

fn bench(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("quarter-round");

    for count in &[1usize, 16, 256, 4096] {
        group.throughput(Throughput::Bytes((count * STATE_WORDS * WORD_BYTES) as u64));

        group.bench_function(BenchmarkId::new("quarter_round", count), |b| {
            let mut states: Vec<State> = (0..*count)
                .map(|i| [i as u32, 0xaafb4cd5, 0x18769012, 0xaff22300])
                .collect();
            b.iter(|| {
                for state in states.iter_mut() {
                    *state = quarter_round(black_box(*state));
                }
            });
        });

        group.bench_function(BenchmarkId::new("quarter_round_at", count), |b| {
            let mut words = vec![0x0012dffa_u32; count * STATE_WORDS];
            b.iter(|| {
                for chunk in words.chunks_exact_mut(STATE_WORDS) {
                    quarter_round_at(0, 1, 2, 3, black_box(chunk));
                }
            });
        });
    }

    group.finish();
}

criterion_group_bench!(benches, bench);
criterion_main!(benches);
