//! Benchmarks for scrambled board generation.
//!
//! # Benchmarks
//!
//! - **`generator_uniform`**: Draws uniformly random solvable boards of several
//!   dimensions, including the parity repair step.
//! - **`generator_random_walk`**: Walks 200 slides away from the 4×4 goal.
//!
//! Each benchmark runs the fixed seeds below so the measured boards are the same
//! from run to run.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use slidetile_generator::{ScrambleGenerator, ScrambleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generator_uniform(c: &mut Criterion) {
    for dimension in [3, 4, 8] {
        let generator = ScrambleGenerator::new(dimension).unwrap();
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = ScrambleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(
                    "generator_uniform",
                    format!("{dimension}x{dimension}/seed_{i}"),
                ),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

fn bench_generator_random_walk(c: &mut Criterion) {
    let generator = ScrambleGenerator::new(4).unwrap().with_depth(200);
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = ScrambleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_random_walk", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_uniform,
        bench_generator_random_walk
);
criterion_main!(benches);
