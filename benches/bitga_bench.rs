//! Criterion benchmarks for the binary GA engine.
//!
//! Uses the OneMax objective to measure operator and population overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use u_bitga::ga::{
    Chromosome, Counters, CrossoverOperator, GaConfig, GaEngine, Individual, Population,
    SinglePointCrossover,
};

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_population_init(c: &mut Criterion) {
    let mut group = c.benchmark_group("population_init");
    group.sample_size(20);

    for (size, len) in [(50usize, 64usize), (200, 256), (1000, 64)] {
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_l{}", size, len), size),
            &(size, len),
            |b, &(size, len)| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| {
                    let pop = Population::random(
                        black_box(size),
                        black_box(len),
                        Arc::new(Counters::new()),
                        &mut rng,
                    );
                    black_box(pop)
                })
            },
        );
    }
    group.finish();
}

fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve");
    group.sample_size(20);

    for &size in &[50usize, 200, 1000] {
        let config = GaConfig::default()
            .with_population_size(size)
            .with_chromosome_length(128)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, config| {
            let mut engine = GaEngine::new(config).expect("valid config");
            b.iter(|| {
                engine.evolve();
                black_box(engine.generation())
            })
        });
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_point_crossover");

    for &len in &[16usize, 256, 4096] {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = Individual::new(Chromosome::random(len, &mut rng));
        let p2 = Individual::new(Chromosome::random(len, &mut rng));
        group.bench_with_input(BenchmarkId::from_parameter(len), &(p1, p2), |b, (p1, p2)| {
            b.iter(|| {
                let offspring =
                    SinglePointCrossover.perform(black_box(p1), black_box(p2), &mut rng);
                black_box(offspring)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_population_init, bench_evolve, bench_crossover);
criterion_main!(benches);
