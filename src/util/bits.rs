//! Bit counting and parity helpers.

/// Population count via Kernighan's loop: each `v &= v - 1` clears the
/// lowest set bit. Negative numbers are counted in their two's-complement
/// representation.
pub fn count_set_bits(number: i32) -> u32 {
    let mut v = number as u32;
    let mut count = 0;
    while v != 0 {
        v &= v - 1;
        count += 1;
    }
    count
}

/// True iff `num` is even; consistent for negatives.
pub fn is_even(num: i32) -> bool {
    num % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popcount_matches_intrinsic() {
        for v in [0, 1, 2, 3, 255, i32::MAX, i32::MIN, -1] {
            assert_eq!(count_set_bits(v), v.count_ones(), "mismatch for {v}");
        }
    }

    #[test]
    fn parity() {
        assert!(is_even(0));
        assert!(is_even(-4));
        assert!(!is_even(7));
        assert!(!is_even(-7));
    }
}
