//! Worker-to-project placement optimization.
//!
//! Matches a pool of workers — each carrying certification and skill tags —
//! against a project's requirement profile, and ranks candidate orderings of
//! the pool with a genetic algorithm:
//!
//! - **Fitness**: weighted overlap between a worker's tags and the project's
//!   required tags.
//! - **Encoding**: each individual is a permutation of worker indices
//!   ([`ga::Ranking`]).
//! - **Operators**: binary tournament selection, single-cut order crossover,
//!   swap mutation, elitist (μ+λ) replacement.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`models::Worker`],
//!   [`models::ProjectRequirement`]
//! - **`ga`**: The optimizer — [`ga::PlacementProblem`], [`ga::GaConfig`],
//!   [`ga::GaRunner`]
//! - **`matching`**: Post-processing of a finished run into a deduplicated
//!   list of qualifying workers
//!
//! # Example
//!
//! ```
//! use u_placement::ga::{GaConfig, GaRunner, PlacementProblem};
//! use u_placement::matching::top_workers;
//! use u_placement::models::{ProjectRequirement, Worker};
//!
//! let workers = vec![
//!     Worker::new("W001")
//!         .with_name("Alice")
//!         .with_certification("IT")
//!         .with_skill("Engineer"),
//!     Worker::new("W002").with_name("Bob").with_skill("Project Manager"),
//! ];
//! let project = ProjectRequirement::new("Datacenter Rollout")
//!     .with_required_certification("IT")
//!     .with_required_skill("Engineer");
//!
//! let problem = PlacementProblem::new(&workers, project.clone());
//! let config = GaConfig::default().with_seed(42);
//! let result = GaRunner::run(&problem, &config).unwrap();
//!
//! let best = top_workers(&result, &workers, &project, 3);
//! assert_eq!(best[0].id, "W001");
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod error;
pub mod ga;
pub mod matching;
pub mod models;

pub use error::{Error, Result};
