//! Parent selection for the GA.
//!
//! Tournament selection with a fixed size: pressure depends only on the
//! tournament size, never on raw cost values or rank.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use rand::seq::index;
use rand::Rng;

/// Number of contestants per tournament.
pub const TOURNAMENT_SIZE: usize = 5;

/// Tournament selection without replacement.
///
/// Samples `min(TOURNAMENT_SIZE, costs.len())` distinct indices uniformly
/// and returns the one with the lowest cost. Ties go to the contestant
/// drawn first.
///
/// # Panics
/// Panics if `costs` is empty.
pub fn tournament<R: Rng>(costs: &[f64], rng: &mut R) -> usize {
    assert!(!costs.is_empty(), "cannot select from empty population");

    let k = TOURNAMENT_SIZE.min(costs.len());
    let mut contestants = index::sample(rng, costs.len(), k).into_iter();

    // k >= 1, so the sample is never empty
    let mut best = contestants.next().unwrap_or(0);
    for idx in contestants {
        if costs[idx] < costs[best] {
            best = idx;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_tournament_favors_best() {
        let costs = [10.0, 5.0, 1.0, 8.0, 7.0, 9.0, 6.0, 4.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 8];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&costs, &mut rng)] += 1;
        }
        // Index 2 is in a 5-of-8 sample with probability 5/8
        let best_count = counts[2];
        assert!(
            best_count > 5800,
            "expected best to win ~62% of tournaments, got {best_count}/{n}"
        );
        // Without replacement the three worst can never win
        assert_eq!(counts[0], 0);
        assert_eq!(counts[5], 0);
        assert_eq!(counts[3], 0);
    }

    #[test]
    fn test_small_population_always_returns_best() {
        // Fewer than five individuals: the whole population competes
        let costs = [3.0, 2.0, 9.0];
        let mut rng = create_rng(7);
        for _ in 0..100 {
            assert_eq!(tournament(&costs, &mut rng), 1);
        }
    }

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(42);
        assert_eq!(tournament(&[5.0], &mut rng), 0);
    }

    #[test]
    fn test_equal_costs_are_roughly_uniform() {
        let costs = [5.0; 10];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 10];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&costs, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 700, "expected roughly uniform winners, got {counts:?}");
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        tournament(&[], &mut rng);
    }
}
