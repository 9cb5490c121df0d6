//! Criterion benchmarks for the placement GA.
//!
//! Uses synthetic rosters so measurements reflect pure algorithm overhead
//! rather than any particular dataset.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use u_placement::ga::{FitnessAggregation, GaConfig, GaRunner, PlacementProblem};
use u_placement::models::{ProjectRequirement, Worker};

const CERT_TAGS: [&str; 5] = ["IT", "K3", "Manajemen", "Kompetensi", "MR"];
const SKILL_TAGS: [&str; 5] = [
    "Engineer",
    "Project Coordinator",
    "Project Manager",
    "Support Engineer",
    "SE Coordinator",
];

/// Roster of `n` workers, each with 1-3 random certs and skills.
fn synthetic_roster(n: usize, seed: u64) -> Vec<Worker> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let mut worker = Worker::new(format!("W{i:03}"));
            for _ in 0..rng.random_range(1..=3) {
                worker = worker.with_certification(CERT_TAGS[rng.random_range(0..5)]);
            }
            for _ in 0..rng.random_range(1..=3) {
                worker = worker.with_skill(SKILL_TAGS[rng.random_range(0..5)]);
            }
            worker
        })
        .collect()
}

fn demanding_project() -> ProjectRequirement {
    ProjectRequirement::new("bench")
        .with_required_certification("IT")
        .with_required_certification("K3")
        .with_required_skill("Engineer")
        .with_required_skill("Project Manager")
}

fn bench_ga_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run");

    for pool_size in [10, 50, 200] {
        let workers = synthetic_roster(pool_size, 7);
        let problem = PlacementProblem::new(&workers, demanding_project());
        let config = GaConfig::default().with_seed(42);

        group.bench_with_input(
            BenchmarkId::new("default_config", pool_size),
            &pool_size,
            |b, _| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(&problem), black_box(&config)).unwrap();
                    black_box(result.best().fitness)
                })
            },
        );
    }

    group.finish();
}

fn bench_aggregation_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    let workers = synthetic_roster(100, 7);

    for (label, aggregation) in [
        ("lead_worker", FitnessAggregation::LeadWorker),
        ("prefix_sum_3", FitnessAggregation::PrefixSum(3)),
        ("total", FitnessAggregation::Total),
    ] {
        let problem =
            PlacementProblem::new(&workers, demanding_project()).with_aggregation(aggregation);
        let config = GaConfig::default()
            .with_population_size(40)
            .with_generations(50)
            .with_seed(42);

        group.bench_function(label, |b| {
            b.iter(|| {
                let result = GaRunner::run(black_box(&problem), black_box(&config)).unwrap();
                black_box(result.best().fitness)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ga_run, bench_aggregation_policies);
criterion_main!(benches);
