//! Tournament selection of breeding parents.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::seq::index::sample;
use rand::Rng;

use crate::ga::Ranking;

/// Selects breeding parents via tournament selection.
///
/// Fills `count` parent slots. Each slot draws `tournament_size` distinct
/// individual indices uniformly without replacement; the one with strictly
/// higher fitness wins, and ties go to the earlier draw (deterministic
/// given the draw order). Returns indices into `population`, not copies —
/// callers pair consecutive selections for breeding.
///
/// # Panics
///
/// Panics if the population holds fewer than `tournament_size`
/// individuals. [`crate::ga::GaRunner`] validates this up front and
/// surfaces it as [`crate::Error::InvalidConfiguration`] instead.
pub fn select_parents<R: Rng>(
    population: &[Ranking],
    count: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Vec<usize> {
    assert!(
        population.len() >= tournament_size && tournament_size >= 1,
        "population ({}) must hold at least tournament_size ({}) individuals",
        population.len(),
        tournament_size
    );

    (0..count)
        .map(|_| {
            let draw = sample(rng, population.len(), tournament_size);
            let mut best = draw.index(0);
            for idx in draw.iter().skip(1) {
                if population[idx].fitness > population[best].fitness {
                    best = idx;
                }
            }
            best
        })
        .collect()
}
