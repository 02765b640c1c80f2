//! Core trait definition for differential-tested exercises.
//!
//! To plug a drill into the harness, implement [`Exercise`] for a marker
//! struct describing the problem. The trait encodes the template every
//! exercise follows:
//! - A solution under test (`solve`) and a trusted oracle (`oracle`).
//! - A fixed table of hand-picked deterministic cases.
//! - A generator producing small randomized inputs from an injected
//!   [`Lcg32`](crate::rng::Lcg32).
//!
//! The harness orchestrates both suites using only these primitives. A failed
//! comparison is recorded, never raised: the exercise contract has no panics
//! on wrong answers, only diagnostics in the report.

use std::fmt::Debug;

use crate::rng::Lcg32;

/// A single differential-tested exercise.
///
/// An `Exercise` corresponds to a *fixed* problem statement; the instance
/// carries no per-run state, so implementations are usually unit structs.
///
/// Semantics:
/// - `solve` is the unit under test. The built-in exercises ship canonical
///   DP solutions, but the harness makes no such assumption; swapping in an
///   experimental implementation keeps the whole verification story.
/// - `oracle` is ground truth: a brute-force enumeration or a canonical DP
///   trusted by inspection. It only ever sees the small inputs produced by
///   `random_input` and `deterministic_cases`.
pub trait Exercise {
    /// Input for one trial. `Clone` so a trial can hand the same input to both
    /// sides; `Debug` so failures can echo the offending input.
    type Input: Clone + Debug;

    /// Output compared via exact equality. Boolean-valued exercises use `bool`
    /// directly rather than a normalized integer.
    type Output: PartialEq + Debug;

    /// Short stable identifier, used in reports and runner output.
    fn name(&self) -> &'static str;

    /// The solution under test.
    fn solve(&self, input: &Self::Input) -> Self::Output;

    /// The trusted reference implementation.
    fn oracle(&self, input: &Self::Input) -> Self::Output;

    /// Fixed input/output pairs covering the documented examples and the
    /// edge cases called out in the problem statement.
    fn deterministic_cases(&self) -> Vec<(Self::Input, Self::Output)>;

    /// Generate one randomized input within the exercise's documented ranges.
    ///
    /// Must draw exclusively from `rng` so that a fixed seed reproduces the
    /// exact input sequence across runs.
    fn random_input(&self, rng: &mut Lcg32) -> Self::Input;

    /// Number of randomized trials per run.
    fn random_trials(&self) -> usize {
        30
    }
}
