//! Permutation-preserving genetic operators.
//!
//! Both operators work on `&[usize]` index permutations and keep the
//! permutation invariant: no duplicates, no omissions.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//!   (order crossover)
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::index::sample;
use rand::Rng;

/// Single-cut order crossover.
///
/// Draws a cut point `p` uniformly from `[1, len)`. Each child keeps one
/// parent's first `p` elements, then appends the other parent's elements
/// in their original relative order, skipping any already present. The
/// prefix plus duplicate-skipping fill guarantees both children are
/// permutations of the parents' universe.
///
/// Length-1 parents have no interior cut point and are returned as
/// clones.
///
/// # Panics
///
/// Panics if the parents have different lengths or are empty.
pub fn cut_point_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);

    let child1 = build_child(parent1, parent2, cut);
    let child2 = build_child(parent2, parent1, cut);

    (child1, child2)
}

/// Build one child: `template`'s prefix up to `cut`, filled from `donor`
/// in relative order.
fn build_child(template: &[usize], donor: &[usize], cut: usize) -> Vec<usize> {
    let n = template.len();
    let mut in_prefix = vec![false; n];
    let mut child = Vec::with_capacity(n);

    for &val in &template[..cut] {
        child.push(val);
        in_prefix[val] = true;
    }
    for &val in donor {
        if !in_prefix[val] {
            child.push(val);
        }
    }

    child
}

/// Swap mutation: exchange two distinct random positions.
///
/// A transposition trivially preserves the permutation invariant.
/// Length-1 permutations are left unchanged.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let draw = sample(rng, n, 2);
    perm.swap(draw.index(0), draw.index(1));
}
