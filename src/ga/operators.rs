//! Permutation-preserving genetic operators for tours.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): Davis (1985) — copies a segment from one
//!   parent and fills the rest in the other parent's relative order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct positions — O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::random::distinct_pair;
use rand::Rng;

const EMPTY: usize = usize::MAX;

/// Order Crossover (OX) producing a single child.
///
/// Draws two distinct cut points `start < end` and delegates to
/// [`order_crossover_at`].
///
/// # Panics
/// Panics if the parents have different lengths or fewer than two cities.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "crossover needs at least two cities");

    let (start, end) = distinct_pair(n, rng);
    order_crossover_at(parent1, parent2, start, end)
}

/// Order Crossover with fixed cut points.
///
/// 1. Copy `parent1[start..end]` into the same child positions
/// 2. Walk `parent2` front to back; every city not already in the child
///    goes into the leftmost empty slot
///
/// The fill cursor only moves right, so the empty slots are filled in
/// strictly left-to-right order.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn order_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    debug_assert!(start < end && end <= n);

    let mut child = vec![EMPTY; n];
    let mut placed = vec![false; n];

    for i in start..end {
        child[i] = parent1[i];
        placed[parent1[i]] = true;
    }

    let mut cursor = 0;
    for &city in parent2 {
        if placed[city] {
            continue;
        }
        while cursor < n && child[cursor] != EMPTY {
            cursor += 1;
        }
        if cursor < n {
            child[cursor] = city;
            placed[city] = true;
        }
    }

    child
}

/// With probability `rate`, swaps two distinct random positions.
///
/// Returns whether the tour was changed. Tours shorter than two cities are
/// left alone.
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rate: f64, rng: &mut R) -> bool {
    if tour.len() < 2 || rng.random::<f64>() >= rate {
        return false;
    }
    let (i, j) = distinct_pair(tour.len(), rng);
    tour.swap(i, j);
    true
}
