//! Genetic-algorithm placement optimizer.
//!
//! Evolves rankings of the worker pool against a project's requirement
//! profile. Each individual is a permutation of worker indices
//! ([`Ranking`]); the generational loop is evaluate → tournament selection
//! → single-cut order crossover → swap mutation → elitist replacement,
//! with the generation count as the sole stopping condition.
//!
//! Fitness is **maximized**: a ranking's score is a nonnegative weighted
//! tag-overlap count (see [`match_score`] and [`FitnessAggregation`]).
//!
//! # Key Types
//!
//! - [`PlacementProblem`]: Problem definition — roster, requirement
//!   profile, scoring policy
//! - [`GaConfig`]: Algorithm parameters
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final ranked population
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

mod config;
mod fitness;
mod individual;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use fitness::{match_score, FitnessAggregation, PlacementProblem, ScoreWeights};
pub use individual::Ranking;
pub use runner::{elitist_replacement, GaResult, GaRunner};
pub use selection::select_parents;
