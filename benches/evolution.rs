//! Benchmarks for the evolution engine.
//!
//! This benchmarks one full generation (evaluate + breed) - the hot path.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use weasel::evo::{Engine, EvolutionConfig};

fn config(population_size: usize) -> EvolutionConfig {
    EvolutionConfig {
        population_size,
        seed: 42,
        ..EvolutionConfig::default()
    }
}

fn bench_generation_step(c: &mut Criterion) {
    for size in [200usize, 2000] {
        c.bench_function(&format!("generation_step_pop{size}"), |b| {
            b.iter_batched(
                || Engine::seeded(&config(size)).unwrap(),
                |mut engine| black_box(engine.step()),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_full_run_small_target(c: &mut Criterion) {
    let config = EvolutionConfig {
        target: "cat".to_string(),
        alphabet: "abct".to_string(),
        population_size: 50,
        mutation_rate: 0.1,
        max_generations: 500,
        seed: 42,
        ..EvolutionConfig::default()
    };

    c.bench_function("full_run_cat", |b| {
        b.iter_batched(
            || Engine::seeded(&config).unwrap(),
            |mut engine| black_box(engine.run(|_| {})),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_generation_step, bench_full_run_small_target);
criterion_main!(benches);
