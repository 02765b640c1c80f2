use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dp_drills::exercises::{edit_distance, knapsack, longest_increasing};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_word(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[u8] = b"abcde";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

fn bench_edit_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance");
    for &len in &[64usize, 256, 1024] {
        group.bench_function(format!("len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    let a = random_word(&mut rng, len);
                    let b = random_word(&mut rng, len);
                    (a, b)
                },
                |(a, b)| criterion::black_box(edit_distance::solve(&a, &b)),
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_01");
    for &n in &[32usize, 128, 512] {
        group.bench_function(format!("items_{n}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    let weights: Vec<u32> = (0..n).map(|_| rng.gen_range(1..50)).collect();
                    let values: Vec<u32> = (0..n).map(|_| rng.gen_range(1..100)).collect();
                    (weights, values)
                },
                |(weights, values)| {
                    criterion::black_box(knapsack::solve(&weights, &values, 1_000))
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

fn bench_longest_increasing(c: &mut Criterion) {
    let mut group = c.benchmark_group("longest_increasing");
    for &len in &[1_000usize, 10_000, 100_000] {
        group.bench_function(format!("len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    (0..len).map(|_| rng.gen_range(-1_000..1_000)).collect::<Vec<i32>>()
                },
                |nums| criterion::black_box(longest_increasing::solve(&nums)),
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_edit_distance,
    bench_knapsack,
    bench_longest_increasing
);
criterion_main!(benches);
