//! Fitness scoring for worker rankings.
//!
//! Scoring is two-layered:
//!
//! 1. [`match_score`] scores one worker against the requirement profile —
//!    weighted counts of overlapping certification and skill tags.
//! 2. [`FitnessAggregation`] lifts per-worker scores to a full
//!    [`Ranking`]: score the head of the ranking only (the default), a
//!    prefix of it, or the whole pool.

use crate::ga::Ranking;
use crate::models::{ProjectRequirement, Worker};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weights applied to certification and skill matches.
///
/// Both default to 10.0 — certifications and skills count equally.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreWeights {
    /// Points per overlapping certification tag.
    pub certification: f64,
    /// Points per overlapping skill tag.
    pub skill: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            certification: 10.0,
            skill: 10.0,
        }
    }
}

/// Scores a worker against a project's requirement profile.
///
/// Pure and deterministic: the weighted sum of the two tag-set
/// intersection sizes. Always nonnegative.
pub fn match_score(worker: &Worker, project: &ProjectRequirement, weights: &ScoreWeights) -> f64 {
    let cert_matches = worker
        .certifications
        .intersection(&project.required_certifications)
        .count();
    let skill_matches = worker
        .skills
        .intersection(&project.required_skills)
        .count();

    cert_matches as f64 * weights.certification + skill_matches as f64 * weights.skill
}

/// Policy for lifting per-worker scores to a full ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FitnessAggregation {
    /// Score of the worker at permutation position 0 only.
    ///
    /// The GA effectively optimizes who sits at the head of the ranking.
    LeadWorker,

    /// Sum of the scores of the first `k` workers in the ranking.
    ///
    /// Makes the ordering of the leading positions matter, which aligns
    /// with the top-K extraction callers do afterwards. `k` is clamped to
    /// the pool size.
    PrefixSum(usize),

    /// Sum over the whole permutation.
    ///
    /// Ordering-invariant; useful as a roster-quality baseline.
    Total,
}

impl Default for FitnessAggregation {
    fn default() -> Self {
        FitnessAggregation::LeadWorker
    }
}

/// A placement optimization problem.
///
/// Owns the worker roster, the requirement profile, and the scoring
/// policy. The optimizer reads no state beyond this struct, so concurrent
/// runs over different problems never interfere.
///
/// # Example
///
/// ```
/// use u_placement::ga::{FitnessAggregation, PlacementProblem};
/// use u_placement::models::{ProjectRequirement, Worker};
///
/// let workers = vec![Worker::new("W001").with_skill("Engineer")];
/// let project = ProjectRequirement::new("Audit").with_required_skill("Engineer");
///
/// let problem = PlacementProblem::new(&workers, project)
///     .with_aggregation(FitnessAggregation::PrefixSum(3));
/// ```
#[derive(Debug, Clone)]
pub struct PlacementProblem {
    /// The worker roster, indexed by the permutation entries.
    workers: Vec<Worker>,
    /// The project being staffed.
    project: ProjectRequirement,
    /// Match weights.
    weights: ScoreWeights,
    /// Ranking-level fitness policy.
    aggregation: FitnessAggregation,
}

impl PlacementProblem {
    /// Creates a problem from a roster and a requirement profile.
    ///
    /// The roster is cloned; the caller keeps ownership of its copy.
    pub fn new(workers: &[Worker], project: ProjectRequirement) -> Self {
        Self {
            workers: workers.to_vec(),
            project,
            weights: ScoreWeights::default(),
            aggregation: FitnessAggregation::default(),
        }
    }

    /// Sets the match weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the ranking-level fitness policy.
    pub fn with_aggregation(mut self, aggregation: FitnessAggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Number of workers in the roster (= permutation length).
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// The requirement profile being staffed.
    pub fn project(&self) -> &ProjectRequirement {
        &self.project
    }

    /// Scores a single worker of the roster by index.
    pub fn worker_score(&self, index: usize) -> f64 {
        match_score(&self.workers[index], &self.project, &self.weights)
    }

    /// Evaluates a ranking under the configured aggregation policy.
    ///
    /// Pure per individual — safe to call in parallel across a
    /// population.
    pub fn evaluate(&self, ranking: &Ranking) -> f64 {
        match self.aggregation {
            FitnessAggregation::LeadWorker => ranking
                .lead()
                .map(|idx| self.worker_score(idx))
                .unwrap_or(0.0),
            FitnessAggregation::PrefixSum(k) => ranking
                .order
                .iter()
                .take(k)
                .map(|&idx| self.worker_score(idx))
                .sum(),
            FitnessAggregation::Total => ranking
                .order
                .iter()
                .map(|&idx| self.worker_score(idx))
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact_match_pair() -> (Worker, ProjectRequirement) {
        let worker = Worker::new("W001")
            .with_name("Alice")
            .with_certification("IT")
            .with_skill("Engineer");
        let project = ProjectRequirement::new("Rollout")
            .with_required_certification("IT")
            .with_required_skill("Engineer");
        (worker, project)
    }

    #[test]
    fn test_exact_match_scores_twenty() {
        // One cert match + one skill match at default 10/10 weights.
        let (worker, project) = exact_match_pair();
        let score = match_score(&worker, &project, &ScoreWeights::default());
        assert!((score - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_disjoint_tags_score_zero() {
        let worker = Worker::new("W002")
            .with_certification("MR")
            .with_skill("Support Engineer");
        let project = ProjectRequirement::new("Rollout")
            .with_required_certification("IT")
            .with_required_skill("Engineer");

        let score = match_score(&worker, &project, &ScoreWeights::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let (worker, project) = exact_match_pair();
        let weights = ScoreWeights::default();
        assert_eq!(
            match_score(&worker, &project, &weights),
            match_score(&worker, &project, &weights)
        );
    }

    #[test]
    fn test_custom_weights() {
        let (worker, project) = exact_match_pair();
        let weights = ScoreWeights {
            certification: 3.0,
            skill: 7.0,
        };
        let score = match_score(&worker, &project, &weights);
        assert!((score - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_partial_overlap_counts_intersection_only() {
        let worker = Worker::new("W003")
            .with_certification("IT")
            .with_certification("K3")
            .with_skill("Engineer")
            .with_skill("Project Manager");
        let project = ProjectRequirement::new("Rollout")
            .with_required_certification("K3")
            .with_required_skill("SE Coordinator");

        // One cert overlap, zero skill overlap.
        let score = match_score(&worker, &project, &ScoreWeights::default());
        assert!((score - 10.0).abs() < 1e-10);
    }

    fn three_worker_problem(aggregation: FitnessAggregation) -> PlacementProblem {
        let workers = vec![
            Worker::new("W1")
                .with_certification("IT")
                .with_skill("Engineer"), // score 20
            Worker::new("W2").with_skill("Engineer"), // score 10
            Worker::new("W3"),                        // score 0
        ];
        let project = ProjectRequirement::new("Rollout")
            .with_required_certification("IT")
            .with_required_skill("Engineer");
        PlacementProblem::new(&workers, project).with_aggregation(aggregation)
    }

    #[test]
    fn test_lead_worker_aggregation() {
        let problem = three_worker_problem(FitnessAggregation::LeadWorker);
        assert_eq!(problem.evaluate(&Ranking::new(vec![0, 1, 2])), 20.0);
        assert_eq!(problem.evaluate(&Ranking::new(vec![2, 0, 1])), 0.0);
    }

    #[test]
    fn test_prefix_sum_aggregation() {
        let problem = three_worker_problem(FitnessAggregation::PrefixSum(2));
        assert_eq!(problem.evaluate(&Ranking::new(vec![0, 1, 2])), 30.0);
        assert_eq!(problem.evaluate(&Ranking::new(vec![2, 1, 0])), 10.0);
    }

    #[test]
    fn test_prefix_sum_clamps_to_pool() {
        let problem = three_worker_problem(FitnessAggregation::PrefixSum(99));
        assert_eq!(problem.evaluate(&Ranking::new(vec![0, 1, 2])), 30.0);
    }

    #[test]
    fn test_total_aggregation_is_order_invariant() {
        let problem = three_worker_problem(FitnessAggregation::Total);
        let a = problem.evaluate(&Ranking::new(vec![0, 1, 2]));
        let b = problem.evaluate(&Ranking::new(vec![2, 1, 0]));
        assert_eq!(a, b);
        assert_eq!(a, 30.0);
    }
}
