//! Error types for TSP optimization.
//!
//! Configuration and invariant errors abort the run that raised them.
//! A missing reference cost is not an error; it is carried as `None`
//! (see [`optimality_gap`](crate::benchmark::optimality_gap)).

use thiserror::Error;

/// Result alias used throughout the crate.
pub type TspResult<T> = Result<T, TspError>;

/// Why a tour is not a permutation of `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourViolation {
    /// The tour does not visit exactly `expected` cities.
    WrongLength {
        /// Number of cities in the instance.
        expected: usize,
        /// Length of the offending tour.
        actual: usize,
    },
    /// A city index is not in `0..n`.
    OutOfRange {
        /// The offending index.
        city: usize,
        /// Number of cities in the instance.
        n: usize,
    },
    /// A city index appears more than once.
    Duplicate {
        /// The repeated index.
        city: usize,
    },
}

impl std::fmt::Display for TourViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TourViolation::WrongLength { expected, actual } => {
                write!(f, "expected {expected} cities, got {actual}")
            }
            TourViolation::OutOfRange { city, n } => {
                write!(f, "city {city} is out of range for {n} cities")
            }
            TourViolation::Duplicate { city } => write!(f, "city {city} is visited twice"),
        }
    }
}

/// Unified error type for engine construction and execution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// A parameter is out of range, or the instance is too small to search.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of the rejected parameter.
        message: String,
    },

    /// A tour broke the permutation invariant. Indicates an operator bug.
    #[error("invalid tour: {reason}")]
    InvalidTour {
        /// The specific violation.
        reason: TourViolation,
    },

    /// The distance matrix is not square, or holds negative or non-finite weights.
    #[error("invalid distance matrix: {message}")]
    InvalidMatrix {
        /// Description of the malformed entry.
        message: String,
    },
}

impl TspError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        TspError::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub(crate) fn matrix(message: impl Into<String>) -> Self {
        TspError::InvalidMatrix {
            message: message.into(),
        }
    }
}

impl From<TourViolation> for TspError {
    fn from(reason: TourViolation) -> Self {
        TspError::InvalidTour { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = TspError::config("population_size must be positive");
        assert_eq!(
            err.to_string(),
            "invalid configuration: population_size must be positive"
        );

        let err: TspError = TourViolation::Duplicate { city: 3 }.into();
        assert_eq!(err.to_string(), "invalid tour: city 3 is visited twice");

        let err: TspError = TourViolation::WrongLength {
            expected: 5,
            actual: 4,
        }
        .into();
        assert_eq!(err.to_string(), "invalid tour: expected 5 cities, got 4");
    }
}
