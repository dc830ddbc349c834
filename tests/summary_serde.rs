//! JSON layout of benchmark summaries.
#![cfg(feature = "serde")]

use tsp_metaheur::benchmark::{Algorithm, BenchmarkConfig, BenchmarkHarness, BenchmarkSummary};
use tsp_metaheur::sa::SaConfig;
use tsp_metaheur::DistanceMatrix;

#[test]
fn summary_round_trips_through_json() {
    let m = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)])
        .unwrap();
    let config = BenchmarkConfig::new(Algorithm::Sa(SaConfig::default().with_cooling_rate(0.9)))
        .with_run_count(2);
    let summary = BenchmarkHarness::new(config).unwrap().run(&m, None);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["algorithm"], "sa");
    assert_eq!(json["num_cities"], 4);
    assert_eq!(json["total_runs"], 2);
    assert!(json["reference_cost"].is_null());
    assert_eq!(json["raw_results"][0]["outcome"]["status"], "completed");
    assert!(json["raw_results"][0]["outcome"]["optimality_gap_percent"].is_null());

    let back: BenchmarkSummary = serde_json::from_value(json).unwrap();
    assert_eq!(back.total_runs, summary.total_runs);
    for (a, b) in back.raw_results.iter().zip(&summary.raw_results) {
        assert_eq!((a.run, a.seed), (b.run, b.seed));
        assert!((a.best_cost().unwrap() - b.best_cost().unwrap()).abs() < 1e-9);
    }
}
