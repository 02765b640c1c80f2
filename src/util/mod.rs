//! Kata utilities: small, independent building blocks for drill solutions.
//!
//! Nothing here depends on the harness or the exercises; each submodule is a
//! handful of pure routines or one fixed-capacity container. Fallible
//! operations share a single error type, [`UtilError`]: capacity and bounds
//! violations are reported, never undefined.

pub mod arrays;
pub mod bits;
pub mod bitset;
pub mod date;
pub mod digits;
pub mod error;
pub mod roman;
pub mod stack;
pub mod text;

pub use error::UtilError;
