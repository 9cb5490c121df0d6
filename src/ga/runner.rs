//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete generational cycle:
//! initialization → evaluation → selection → crossover → mutation →
//! offspring evaluation → elitist replacement. The generation count is the
//! sole stopping condition; there is deliberately no convergence or
//! stagnation detection.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::ga::operators::{cut_point_crossover, swap_mutation};
use crate::ga::selection::select_parents;
use crate::ga::{GaConfig, PlacementProblem, Ranking};

/// Result of a placement GA run.
///
/// Holds the final population with each ranking's fitness attached. The
/// population order is whatever the last replacement produced; use
/// [`top`](GaResult::top) or [`best`](GaResult::best) for ranked access.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The final population.
    pub population: Vec<Ranking>,
    /// Number of generations actually executed.
    pub generations: usize,
    /// Whether the run was cancelled externally.
    pub cancelled: bool,
    /// Maximum population fitness after initialization and after each
    /// generation. Non-decreasing under elitist replacement.
    pub fitness_history: Vec<f64>,
}

impl GaResult {
    /// The fitness scores parallel to [`population`](GaResult::population).
    pub fn fitness_scores(&self) -> Vec<f64> {
        self.population.iter().map(|r| r.fitness).collect()
    }

    /// The fittest ranking of the final population.
    pub fn best(&self) -> &Ranking {
        self.top(1)[0]
    }

    /// The `k` fittest rankings, best first.
    ///
    /// Ties keep population order, so results are deterministic. `k` is
    /// clamped to the population size.
    pub fn top(&self, k: usize) -> Vec<&Ranking> {
        let mut ranked: Vec<&Ranking> = self.population.iter().collect();
        ranked.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(k);
        ranked
    }
}

/// Executes the placement GA.
///
/// # Usage
///
/// ```
/// use u_placement::ga::{GaConfig, GaRunner, PlacementProblem};
/// use u_placement::models::{ProjectRequirement, Worker};
///
/// let workers = vec![Worker::new("W001").with_skill("Engineer")];
/// let project = ProjectRequirement::new("Audit").with_required_skill("Engineer");
/// let problem = PlacementProblem::new(&workers, project);
///
/// let result = GaRunner::run(&problem, &GaConfig::default().with_seed(42)).unwrap();
/// assert_eq!(result.best().fitness, 10.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion.
    ///
    /// Fails fast with [`Error::InvalidConfiguration`] for non-viable
    /// tunables and [`Error::InvalidInput`] for an empty worker pool —
    /// before any evaluation work starts.
    pub fn run(problem: &PlacementProblem, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is checked at the generation boundary only, so
    /// per-generation semantics are unaffected; a cancelled run returns
    /// the population as of the last completed generation.
    pub fn run_with_cancel(
        problem: &PlacementProblem,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate()?;
        if problem.worker_count() == 0 {
            return Err(Error::InvalidInput(
                "worker pool is empty: a ranking needs at least one worker".into(),
            ));
        }

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::random()),
        };

        // 1. Initialize and evaluate the starting population
        let mut population: Vec<Ranking> = (0..config.population_size)
            .map(|_| Ranking::random(problem.worker_count(), &mut rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(max_fitness(&population));

        let mut completed = 0usize;
        let mut cancelled = false;

        // 2. Generational loop
        for _ in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Selection: population_size / 2 parent slots, paired
            // consecutively for breeding. An odd leftover parent is
            // dropped.
            let parents = select_parents(
                &population,
                config.population_size / 2,
                config.tournament_size,
                &mut rng,
            );

            // Breeding
            let mut offspring = Vec::with_capacity(parents.len());
            for pair in parents.chunks_exact(2) {
                let (c1, c2) = cut_point_crossover(
                    &population[pair[0]].order,
                    &population[pair[1]].order,
                    &mut rng,
                );
                offspring.push(Ranking::new(c1));
                offspring.push(Ranking::new(c2));
            }

            // Mutation
            for child in &mut offspring {
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    swap_mutation(&mut child.order, &mut rng);
                }
            }

            // Offspring evaluation must finish before replacement reads
            // either fitness set.
            evaluate_population(problem, &mut offspring, config.parallel);

            population = elitist_replacement(population, offspring, config.population_size);
            fitness_history.push(max_fitness(&population));
            completed += 1;
        }

        Ok(GaResult {
            population,
            generations: completed,
            cancelled,
            fitness_history,
        })
    }
}

/// Elitist (μ+λ) generational replacement.
///
/// Merges the current population with its offspring and keeps the
/// `population_size` fittest, best first. Each [`Ranking`] carries its own
/// fitness, so the individual/score pairing survives the merge by
/// construction, and the offspring count is free to differ from the
/// population size. The sort is stable: on ties, parents outrank their
/// offspring.
pub fn elitist_replacement(
    mut population: Vec<Ranking>,
    offspring: Vec<Ranking>,
    population_size: usize,
) -> Vec<Ranking> {
    population.extend(offspring);
    population.sort_by(|a, b| {
        b.fitness
            .partial_cmp(&a.fitness)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    population.truncate(population_size);
    population
}

/// Evaluate every ranking in place.
///
/// Evaluation is pure per individual; with the `parallel` feature and
/// `parallel = true` it fans out over rayon and joins before returning,
/// so callers never observe a partially evaluated population.
fn evaluate_population(problem: &PlacementProblem, population: &mut [Ranking], parallel: bool) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            population.par_iter_mut().for_each(|ranking| {
                let f = problem.evaluate(ranking);
                ranking.fitness = f;
            });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ranking in population.iter_mut() {
        let f = problem.evaluate(ranking);
        ranking.fitness = f;
    }
}

/// Maximum fitness in the population.
fn max_fitness(population: &[Ranking]) -> f64 {
    population
        .iter()
        .map(|r| r.fitness)
        .fold(f64::NEG_INFINITY, f64::max)
}
