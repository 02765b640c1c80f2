//! Differential-tested dynamic-programming drills.
//!
//! This crate packages a set of classic dynamic-programming exercises, each a
//! self-contained solve/oracle pair, together with the harness that verifies
//! them and a grab-bag of small kata utilities.
//!
//! ## Core idea
//! 1. Model an exercise as an [`Exercise`]: an input type, an output type, a
//!    solution under test, and a trusted oracle.
//! 2. Let [`harness`] run the fixed deterministic case table followed by a
//!    seeded randomized suite, comparing solution output to oracle output.
//! 3. Collect the outcome in a [`SuiteReport`]: no global counters, so suites
//!    can run in any order or in parallel.
//!
//! Randomized inputs come from [`Lcg32`], a linear-congruential generator with
//! a fixed default seed: a given build produces the same test inputs every run.
//! This is a deliberate reproducibility property, not an attempt at randomness.
//!
//! ## Quick start
//! ```
//! use dp_drills::{exercises::climbing_stairs::ClimbingStairs, harness, Lcg32};
//!
//! let report = harness::run_exercise(&ClimbingStairs, Lcg32::DEFAULT_SEED);
//! assert!(report.is_success());
//! assert_eq!(report.failed, 0);
//! ```
//!
//! ## Built-in exercises
//! The [`exercises`] module covers the classic drill set: climbing stairs
//! (plain and min-cost), house robber, coin change, equal-subset partition,
//! unique paths (with and without obstacles), minimum path sum, longest
//! increasing subsequence, longest common subsequence, edit distance, 0/1
//! knapsack, target sum, decode ways, and word break.
//!
//! The [`util`] module is independent of the exercises: digit manipulation,
//! bit counting, array helpers, a bounded stack, a bitset, Roman numerals, and
//! date arithmetic, the kind of building blocks drills like these lean on.

pub mod exercise;
pub mod exercises;
pub mod harness;
pub mod rng;
pub mod util;

pub use crate::exercise::Exercise;
pub use crate::harness::SuiteReport;
pub use crate::rng::Lcg32;
