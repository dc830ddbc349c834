//! Symmetric distance matrix and closed-tour cost.

use crate::error::{TourViolation, TspError, TspResult};

/// Immutable N×N matrix of non-negative edge weights.
///
/// Built once per problem instance and shared read-only by every engine
/// run against it. The matrix is `Sync`, so concurrent benchmark runs can
/// borrow the same instance without locking.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::DistanceMatrix;
///
/// let m = DistanceMatrix::new(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.cost(&[0, 1, 2]).unwrap(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    weights: Vec<f64>,
}

impl DistanceMatrix {
    /// Loads a matrix from rows.
    ///
    /// Rejects non-square input and negative or non-finite weights.
    /// Symmetry and the zero diagonal are the loader's responsibility and
    /// are not checked here.
    pub fn new(rows: Vec<Vec<f64>>) -> TspResult<Self> {
        let n = rows.len();
        let mut weights = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(TspError::matrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (j, &w) in row.iter().enumerate() {
                if !w.is_finite() || w < 0.0 {
                    return Err(TspError::matrix(format!(
                        "weight ({i}, {j}) = {w} is not a non-negative finite number"
                    )));
                }
            }
            weights.extend(row);
        }
        Ok(Self { n, weights })
    }

    /// Euclidean distances between 2-D points.
    pub fn from_coordinates(points: &[(f64, f64)]) -> TspResult<Self> {
        let rows = points
            .iter()
            .map(|&(xa, ya)| {
                points
                    .iter()
                    .map(|&(xb, yb)| (xa - xb).hypot(ya - yb))
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the instance has no cities.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Weight of the edge `from -> to`.
    ///
    /// # Panics
    /// Panics if either index is `>= len()`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.weights[from * self.n + to]
    }

    /// Checks that `tour` is a permutation of `0..len()`.
    pub fn validate_tour(&self, tour: &[usize]) -> TspResult<()> {
        if tour.len() != self.n {
            return Err(TourViolation::WrongLength {
                expected: self.n,
                actual: tour.len(),
            }
            .into());
        }
        let mut seen = vec![false; self.n];
        for &city in tour {
            if city >= self.n {
                return Err(TourViolation::OutOfRange { city, n: self.n }.into());
            }
            if std::mem::replace(&mut seen[city], true) {
                return Err(TourViolation::Duplicate { city }.into());
            }
        }
        Ok(())
    }

    /// Cost of the closed loop visiting `tour` in order and returning to
    /// its first city.
    pub fn cost(&self, tour: &[usize]) -> TspResult<f64> {
        self.validate_tour(tour)?;
        Ok(self.closed_cost(tour))
    }

    /// Closed-loop cost without the permutation check.
    pub(crate) fn closed_cost(&self, tour: &[usize]) -> f64 {
        let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
            return 0.0;
        };
        let open: f64 = tour.windows(2).map(|w| self.get(w[0], w[1])).sum();
        open + self.get(last, first)
    }
}
