//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the placement GA.
///
/// Controls population size, generation count, operator rates, and
/// reproducibility.
///
/// # Defaults
///
/// ```
/// use u_placement::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.generations, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_placement::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Constant across generations. Must be at least 2 (and at least
    /// `tournament_size`).
    pub population_size: usize,

    /// Number of generations to run.
    ///
    /// The sole stopping condition — there is no convergence detection.
    /// Zero means the initial population is evaluated and returned with
    /// no evolutionary steps applied.
    pub generations: usize,

    /// Probability of applying swap mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of distinct individuals drawn per tournament.
    ///
    /// Drawn without replacement; the fittest of the draw becomes a
    /// parent. Must be at least 2.
    pub tournament_size: usize,

    /// Whether to evaluate individuals in parallel.
    ///
    /// Only effective with the `parallel` feature; evaluation is pure per
    /// individual, so the only synchronization point is the generation
    /// boundary.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 20,
            mutation_rate: 0.1,
            tournament_size: 2,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::InvalidConfiguration(
                "population_size must be at least 2".into(),
            ));
        }
        if self.tournament_size < 2 {
            return Err(Error::InvalidConfiguration(
                "tournament_size must be at least 2".into(),
            ));
        }
        if self.population_size < self.tournament_size {
            return Err(Error::InvalidConfiguration(format!(
                "population_size ({}) is smaller than tournament_size ({})",
                self.population_size, self.tournament_size
            )));
        }
        Ok(())
    }
}
