//! Deterministic pseudo-random source for the randomized suites.
//!
//! A 32-bit linear-congruential generator with the classic Numerical Recipes
//! constants. The state lives in the struct and is advanced by a pure step, so
//! tests can be re-seeded or run in parallel without reaching into globals.
//!
//! For a fixed seed the generated sequence is identical across runs and
//! platforms; the randomized suites are reproducible regression tests, not
//! fuzzing.

/// Linear-congruential generator: `state = state * 1664525 + 1013904223`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg32 {
    state: u32,
}

impl Lcg32 {
    /// Seed used by the stock drill suites.
    pub const DEFAULT_SEED: u32 = 123_456_789;

    /// Create a generator with an explicit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the next raw value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform-ish draw from the inclusive range `[min, max]`.
    ///
    /// Matches the reduction the drill suites were calibrated against:
    /// `min + next % (max - min + 1)`. The modulo bias is irrelevant at the
    /// tiny spans used here.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn int_in(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "empty range [{min}, {max}]");
        let span = (max as i64 - min as i64 + 1) as u32;
        min.wrapping_add((self.next_u32() % span) as i32)
    }

    /// Draw an index in `[0, len)`.
    ///
    /// # Panics
    /// Panics if `len == 0`.
    pub fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot index an empty collection");
        self.int_in(0, (len - 1) as i32) as usize
    }

    /// Fill a string with `len` characters drawn from `alphabet`.
    pub fn string_from(&mut self, alphabet: &[u8], len: usize) -> String {
        (0..len)
            .map(|_| alphabet[self.index(alphabet.len())] as char)
            .collect()
    }
}

impl Default for Lcg32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}
