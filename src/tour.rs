//! Tour representation and the result of a single engine run.

use std::time::Duration;

/// A permutation of city indices, read as a closed cyclic route.
pub type Tour = Vec<usize>;

/// Appends the first city to the end, turning a permutation into the
/// explicit closed route `[c0, c1, ..., c(n-1), c0]`.
pub fn close_tour(tour: &[usize]) -> Tour {
    let mut closed = Vec::with_capacity(tour.len() + 1);
    closed.extend_from_slice(tour);
    if let Some(&first) = tour.first() {
        closed.push(first);
    }
    closed
}

/// Outcome of one GA or SA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Best tour found, closed (length N+1, first city repeated at the end).
    pub tour: Tour,

    /// Closed-loop cost of `tour`.
    pub best_cost: f64,

    /// Wall-clock time spent in `run()`.
    pub duration: Duration,

    /// Best-so-far cost, one sample per generation (GA) or per 100
    /// iterations (SA).
    pub convergence_history: Vec<f64>,

    /// Generations (GA) or annealing iterations (SA) executed.
    pub iterations: usize,
}

impl RunResult {
    /// The best tour without the closing city.
    pub fn open_tour(&self) -> &[usize] {
        match self.tour.len() {
            0 => &self.tour,
            len => &self.tour[..len - 1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_tour() {
        assert_eq!(close_tour(&[2, 0, 1]), vec![2, 0, 1, 2]);
        assert_eq!(close_tour(&[]), Vec::<usize>::new());
    }

    #[test]
    fn test_open_tour_strips_closing_city() {
        let result = RunResult {
            tour: close_tour(&[3, 1, 0, 2]),
            best_cost: 1.0,
            duration: Duration::ZERO,
            convergence_history: vec![],
            iterations: 0,
        };
        assert_eq!(result.open_tour(), &[3, 1, 0, 2]);
    }
}
