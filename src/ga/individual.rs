//! Permutation chromosome for worker rankings.

use rand::seq::SliceRandom;
use rand::Rng;

/// A candidate ranking of the worker pool.
///
/// The chromosome is a permutation of worker indices `0..worker_count`:
/// every index appears exactly once. The fitness travels with the
/// chromosome so population and scores can never fall out of pairing.
///
/// Higher fitness = better match (maximization convention).
/// [`f64::NEG_INFINITY`] marks a not-yet-evaluated individual.
#[derive(Debug, Clone)]
pub struct Ranking {
    /// Worker indices in ranked order.
    pub order: Vec<usize>,
    /// Fitness value (higher = better).
    pub fitness: f64,
}

impl Ranking {
    /// Creates an unevaluated ranking from an explicit ordering.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Creates a uniform-random permutation of `0..worker_count`.
    pub fn random<R: Rng>(worker_count: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..worker_count).collect();
        order.shuffle(rng);
        Self::new(order)
    }

    /// The worker index at the head of the ranking.
    ///
    /// Returns `None` only for an empty ordering, which the optimizer
    /// rejects before construction.
    pub fn lead(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Whether this ranking has been evaluated.
    pub fn is_evaluated(&self) -> bool {
        self.fitness > f64::NEG_INFINITY
    }

    /// Whether the ordering is a valid permutation of `0..n`.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &idx in &self.order {
            if idx >= n || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }
}
