//! Neighborhood move and acceptance rule for tour annealing.

/// 2-opt move: a copy of `tour` with the closed segment `tour[i..=j]`
/// reversed. Segments never wrap around the end of the array.
///
/// # Panics
/// Panics unless `i < j < tour.len()`.
pub fn two_opt(tour: &[usize], i: usize, j: usize) -> Vec<usize> {
    assert!(i < j && j < tour.len(), "2-opt needs i < j < n, got ({i}, {j})");
    let mut next = tour.to_vec();
    next[i..=j].reverse();
    next
}

/// Metropolis acceptance probability for a cost change `delta` at
/// `temperature`.
///
/// Improvements (`delta < 0`) are always accepted. Otherwise the result is
/// `exp(-delta / temperature)`, which underflows to `0.0` for very large
/// ratios. A non-positive temperature accepts nothing but improvements.
pub fn metropolis_probability(delta: f64, temperature: f64) -> f64 {
    if delta < 0.0 {
        1.0
    } else if temperature > 0.0 {
        (-delta / temperature).exp()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_opt_reverses_inclusive_segment() {
        assert_eq!(two_opt(&[0, 1, 2, 3, 4, 5], 1, 4), vec![0, 4, 3, 2, 1, 5]);
        assert_eq!(two_opt(&[0, 1, 2, 3], 0, 3), vec![3, 2, 1, 0]);
        assert_eq!(two_opt(&[0, 1, 2, 3], 2, 3), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_two_opt_leaves_input_untouched() {
        let tour = vec![4, 2, 0, 1, 3];
        let next = two_opt(&tour, 0, 2);
        assert_eq!(tour, vec![4, 2, 0, 1, 3]);
        assert_ne!(next, tour);
    }

    #[test]
    #[should_panic(expected = "2-opt needs i < j < n")]
    fn test_two_opt_rejects_equal_indices() {
        two_opt(&[0, 1, 2], 1, 1);
    }

    #[test]
    fn test_metropolis_improvement_always_accepted() {
        assert_eq!(metropolis_probability(-5.0, 1e-12), 1.0);
        assert_eq!(metropolis_probability(-1e-9, 0.0), 1.0);
    }

    #[test]
    fn test_metropolis_neutral_move() {
        assert_eq!(metropolis_probability(0.0, 10.0), 1.0);
    }

    #[test]
    fn test_metropolis_worsening_move() {
        let p = metropolis_probability(10.0, 10.0);
        assert!((p - (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_metropolis_underflow_is_zero() {
        assert_eq!(metropolis_probability(1e6, 1e-6), 0.0);
        assert_eq!(metropolis_probability(f64::MAX, f64::MIN_POSITIVE), 0.0);
    }

    #[test]
    fn test_metropolis_zero_temperature() {
        assert_eq!(metropolis_probability(1.0, 0.0), 0.0);
    }
}
