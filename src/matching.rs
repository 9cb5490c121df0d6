//! Post-processing of a finished GA run.
//!
//! The optimizer returns ranked permutations of the worker pool; callers
//! want workers. This module expands the top rankings into concrete
//! workers, filters them against the requirement profile, and
//! deduplicates by worker id.

use std::collections::HashSet;

use crate::ga::GaResult;
use crate::models::{ProjectRequirement, Worker};

/// Whether a worker qualifies for a project at all.
///
/// A worker qualifies when **both** tag sets intersect the requirements:
/// at least one required certification and at least one required skill.
/// A profile with an empty requirement set therefore qualifies nobody on
/// that axis — tighten the profile, not the filter.
pub fn qualifies(worker: &Worker, project: &ProjectRequirement) -> bool {
    let cert_overlap = worker
        .certifications
        .intersection(&project.required_certifications)
        .next()
        .is_some();
    let skill_overlap = worker
        .skills
        .intersection(&project.required_skills)
        .next()
        .is_some();
    cert_overlap && skill_overlap
}

/// Extracts the distinct qualifying workers from the `k` best rankings.
///
/// Walks the top `k` rankings best first, and each ranking in permutation
/// order, keeping every qualifying worker the first time its id appears.
/// The result order is deterministic for a seeded run.
///
/// `workers` must be the same roster (same indexing) the problem was
/// built from.
pub fn top_workers<'a>(
    result: &GaResult,
    workers: &'a [Worker],
    project: &ProjectRequirement,
    k: usize,
) -> Vec<&'a Worker> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut matched = Vec::new();

    for ranking in result.top(k) {
        for &idx in &ranking.order {
            let worker = &workers[idx];
            if qualifies(worker, project) && seen.insert(worker.id.as_str()) {
                matched.push(worker);
            }
        }
    }

    matched
}
