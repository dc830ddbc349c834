//! Aggregate statistics over completed runs.

/// Population statistics (ddof = 0) over best costs and run durations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostStatistics {
    pub mean_cost: f64,
    pub std_cost: f64,
    pub variance_cost: f64,
    pub min_cost: f64,
    pub max_cost: f64,
    pub mean_duration_secs: f64,
}

impl CostStatistics {
    /// Computes the statistics, or `None` when there are no samples.
    ///
    /// `costs` and `durations_secs` are paired per run and must have the
    /// same length.
    pub fn from_samples(costs: &[f64], durations_secs: &[f64]) -> Option<Self> {
        debug_assert_eq!(costs.len(), durations_secs.len());
        if costs.is_empty() {
            return None;
        }

        let mean_cost = mean(costs);
        let variance_cost = costs
            .iter()
            .map(|&c| (c - mean_cost) * (c - mean_cost))
            .sum::<f64>()
            / costs.len() as f64;
        let min_cost = costs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_cost = costs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            mean_cost,
            std_cost: variance_cost.sqrt(),
            variance_cost,
            min_cost,
            max_cost,
            mean_duration_secs: mean(durations_secs),
        })
    }
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_none() {
        assert!(CostStatistics::from_samples(&[], &[]).is_none());
    }

    #[test]
    fn test_single_sample_has_zero_spread() {
        let stats = CostStatistics::from_samples(&[12.5], &[0.25]).unwrap();
        assert_eq!(stats.mean_cost, 12.5);
        assert_eq!(stats.std_cost, 0.0);
        assert_eq!(stats.variance_cost, 0.0);
        assert_eq!(stats.min_cost, 12.5);
        assert_eq!(stats.max_cost, 12.5);
        assert_eq!(stats.mean_duration_secs, 0.25);
    }

    #[test]
    fn test_population_variance() {
        let stats =
            CostStatistics::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], &[1.0; 8])
                .unwrap();
        assert!((stats.mean_cost - 5.0).abs() < 1e-12);
        assert!((stats.variance_cost - 4.0).abs() < 1e-12);
        assert!((stats.std_cost - 2.0).abs() < 1e-12);
        assert_eq!(stats.min_cost, 2.0);
        assert_eq!(stats.max_cost, 9.0);
        assert!((stats.mean_duration_secs - 1.0).abs() < 1e-12);
    }
}
