//! End-to-end runs of the drill harness.

use dp_drills::harness::{run_all, run_exercise, run_matching, SuiteReport};
use dp_drills::rng::Lcg32;

#[test]
fn full_run_passes_with_default_seed() {
    let results = run_all(Lcg32::DEFAULT_SEED);
    assert_eq!(results.len(), 15);
    for (name, report) in &results {
        assert!(
            report.is_success(),
            "{name} failed: {:?}",
            report.failures
        );
        assert!(report.total() > 0, "{name} ran no comparisons");
    }
}

#[test]
fn full_run_passes_with_other_seeds() {
    for seed in [1, 42, 0xDEAD_BEEF] {
        for (name, report) in run_all(seed) {
            assert!(
                report.is_success(),
                "{name} failed under seed {seed}: {:?}",
                report.failures
            );
        }
    }
}

#[test]
fn runs_are_reproducible() {
    let a = run_all(7);
    let b = run_all(7);
    assert_eq!(a, b);
}

#[test]
fn filter_selects_by_substring() {
    let paths = run_matching(Lcg32::DEFAULT_SEED, "paths");
    let names: Vec<_> = paths.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, ["unique_paths", "unique_paths_obstacles"]);

    assert!(run_matching(Lcg32::DEFAULT_SEED, "no_such_drill").is_empty());
}

#[test]
fn single_exercise_report_shape() {
    use dp_drills::exercises::climbing_stairs::ClimbingStairs;

    let report = run_exercise(&ClimbingStairs, Lcg32::DEFAULT_SEED);
    assert!(report.is_success());
    // Six table cases plus the randomized trials.
    assert!(report.total() >= 6);
    assert_eq!(report.to_string(), format!("Passed: {}, Failed: 0", report.passed));
}

#[test]
fn reports_merge_across_exercises() {
    let mut total = SuiteReport::new();
    for (_, report) in run_all(3) {
        total.merge(report);
    }
    assert!(total.is_success());
    assert!(total.total() > 100);
}
