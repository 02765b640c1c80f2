//! Differential test harness shared by every exercise.
//!
//! The harness runs two suites against an [`Exercise`]:
//! 1. the fixed deterministic case table, and
//! 2. a randomized suite of [`Exercise::random_trials`] inputs drawn from a
//!    seeded [`Lcg32`], each compared against the oracle.
//!
//! Outcomes accumulate in a [`SuiteReport`] returned by value. A failed
//! comparison is recorded with a diagnostic and the run continues; nothing
//! here panics or short-circuits. Because there is no shared mutable state,
//! reports compose freely and suites may run in parallel.

use std::fmt;

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// Tally of one or more suites, with diagnostics for every failed comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteReport {
    /// Comparisons that matched.
    pub passed: u32,
    /// Comparisons that did not.
    pub failed: u32,
    /// One human-readable line per failed comparison.
    pub failures: Vec<String>,
}

impl SuiteReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff every comparison so far matched.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Total comparisons recorded.
    pub fn total(&self) -> u32 {
        self.passed + self.failed
    }

    pub fn record_pass(&mut self) {
        self.passed += 1;
    }

    pub fn record_fail(&mut self, diagnostic: String) {
        self.failed += 1;
        self.failures.push(diagnostic);
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: SuiteReport) {
        self.passed += other.passed;
        self.failed += other.failed;
        self.failures.extend(other.failures);
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

/// Compare the solution under test against an expected value for one input.
fn check<E: Exercise>(
    ex: &E,
    input: &E::Input,
    expected: &E::Output,
    label: &str,
    report: &mut SuiteReport,
) {
    let actual = ex.solve(input);
    if actual == *expected {
        report.record_pass();
    } else {
        report.record_fail(format!(
            "{} [{label}]: input {:?}: expected {:?}, got {:?}",
            ex.name(),
            input,
            expected,
            actual
        ));
    }
}

/// Run the fixed deterministic case table.
pub fn run_deterministic<E: Exercise>(ex: &E, report: &mut SuiteReport) {
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("deterministic_suite", exercise = ex.name());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    for (input, expected) in ex.deterministic_cases() {
        check(ex, &input, &expected, "deterministic", report);
    }
}

/// Run the randomized suite, comparing the solution against the oracle on
/// inputs drawn from `rng`.
pub fn run_randomized<E: Exercise>(ex: &E, rng: &mut Lcg32, report: &mut SuiteReport) {
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!(
        "randomized_suite",
        exercise = ex.name(),
        trials = ex.random_trials()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    for _ in 0..ex.random_trials() {
        let input = ex.random_input(rng);
        let expected = ex.oracle(&input);
        check(ex, &input, &expected, "random", report);
    }
}

/// Run both suites with a fresh generator seeded from `seed`.
pub fn run_exercise<E: Exercise>(ex: &E, seed: u32) -> SuiteReport {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("run_exercise", exercise = ex.name(), seed);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut report = SuiteReport::new();
    run_deterministic(ex, &mut report);
    let mut rng = Lcg32::new(seed);
    run_randomized(ex, &mut rng, &mut report);
    report
}

type SuiteFn = Box<dyn Fn(u32) -> SuiteReport + Send + Sync>;

fn suite_entry<E>(ex: E) -> (&'static str, SuiteFn)
where
    E: Exercise + Send + Sync + 'static,
{
    let name = ex.name();
    (name, Box::new(move |seed| run_exercise(&ex, seed)))
}

/// Every built-in exercise suite, in drill order.
fn all_suites() -> Vec<(&'static str, SuiteFn)> {
    use crate::exercises::*;

    vec![
        suite_entry(climbing_stairs::ClimbingStairs),
        suite_entry(min_cost_climbing::MinCostClimbing),
        suite_entry(house_robber::HouseRobber),
        suite_entry(coin_change::CoinChange),
        suite_entry(partition_subset::PartitionEqualSubset),
        suite_entry(unique_paths::UniquePaths),
        suite_entry(unique_paths_obstacles::UniquePathsObstacles),
        suite_entry(min_path_sum::MinPathSum),
        suite_entry(longest_increasing::LongestIncreasing),
        suite_entry(longest_common_subsequence::LongestCommonSubsequence),
        suite_entry(edit_distance::EditDistance),
        suite_entry(knapsack::Knapsack01),
        suite_entry(target_sum::TargetSum),
        suite_entry(decode_ways::DecodeWays),
        suite_entry(word_break::WordBreak),
    ]
}

/// Run every built-in exercise whose name contains `needle`, with the same
/// seed. An empty needle matches everything.
///
/// Each exercise gets its own generator, so results do not depend on the
/// order suites execute in. With the `parallel` feature, suites fan out via
/// rayon.
pub fn run_matching(seed: u32, needle: &str) -> Vec<(&'static str, SuiteReport)> {
    let suites: Vec<_> = all_suites()
        .into_iter()
        .filter(|(name, _)| name.contains(needle))
        .collect();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        return suites
            .par_iter()
            .map(|(name, suite)| (*name, suite(seed)))
            .collect();
    }

    #[cfg(not(feature = "parallel"))]
    {
        return suites
            .iter()
            .map(|(name, suite)| (*name, suite(seed)))
            .collect();
    }
}

/// Run every built-in exercise with the same seed.
pub fn run_all(seed: u32) -> Vec<(&'static str, SuiteReport)> {
    run_matching(seed, "")
}
