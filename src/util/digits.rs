//! Decimal digit routines and a fixed-capacity digit buffer.
//!
//! Free functions operate on digit slices: LSB-first for arithmetic (index 0
//! is the least significant digit) and big-endian where the problem hands
//! over digits most-significant first. [`DigitBuffer`] represents a
//! non-negative integer LSB-first with a capacity fixed at creation, for
//! drills that add array-form numbers without reallocating per step.

use crate::util::UtilError;

/// Number of decimal digits in `x`, ignoring the sign. Zero has one digit.
pub fn count_digits(x: i32) -> usize {
    let mut x = x.unsigned_abs();
    let mut count = 1;
    while x >= 10 {
        x /= 10;
        count += 1;
    }
    count
}

/// Decompose `x` (by absolute value) into LSB-first decimal digits.
pub fn split_lsb(x: i32) -> Vec<u8> {
    let mut x = x.unsigned_abs();
    let mut digits = Vec::new();
    loop {
        digits.push((x % 10) as u8);
        x /= 10;
        if x == 0 {
            break;
        }
    }
    digits
}

/// Reassemble an integer from LSB-first digits. Empty input yields 0.
pub fn join_lsb(digits: &[u8]) -> i32 {
    digits
        .iter()
        .rev()
        .fold(0i32, |acc, &d| acc * 10 + i32::from(d))
}

/// True iff the decimal representation of `x` contains a `0` digit.
/// Zero itself counts (its only digit is zero); negatives are examined by
/// absolute value.
pub fn has_zero_digit(x: i32) -> bool {
    let mut x = x.unsigned_abs();
    if x == 0 {
        return true;
    }
    while x > 0 {
        if x % 10 == 0 {
            return true;
        }
        x /= 10;
    }
    false
}

/// Sum of the digits in `digits`.
pub fn digit_sum(digits: &[u8]) -> u32 {
    digits.iter().map(|&d| u32::from(d)).sum()
}

/// Increment a big-endian digit array in place by one.
///
/// Carry ripples from the least significant end (the back). A carry out of
/// the most significant digit is discarded: `[9, 9]` becomes `[0, 0]`. The
/// width-preserving wrap is intentional; widen before calling if the extra
/// digit matters.
pub fn increment_big_endian(digits: &mut [u8]) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
}

/// Add two LSB-first digit arrays, returning the LSB-first sum.
///
/// Every digit must be in 0..=9; zero-length operands are treated as zero.
pub fn add_lsb(a: &[u8], b: &[u8]) -> Result<Vec<u8>, UtilError> {
    for &d in a.iter().chain(b) {
        if d > 9 {
            return Err(UtilError::InvalidDigit(i64::from(d)));
        }
    }
    let width = a.len().max(b.len());
    let mut out = Vec::with_capacity(width + 1);
    let mut carry = 0u8;
    for i in 0..width {
        let da = a.get(i).copied().unwrap_or(0);
        let db = b.get(i).copied().unwrap_or(0);
        let s = da + db + carry;
        out.push(s % 10);
        carry = s / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    if out.is_empty() {
        out.push(0);
    }
    Ok(out)
}

/// Parse ASCII decimal digits into a `u32`. Rejects empty input and any
/// non-digit byte; no sign or whitespace handling.
pub fn parse_u32_decimal(input: &str) -> Result<u32, UtilError> {
    if input.is_empty() {
        return Err(UtilError::Empty);
    }
    let mut value: u32 = 0;
    for byte in input.bytes() {
        if !byte.is_ascii_digit() {
            return Err(UtilError::InvalidDigit(i64::from(byte)));
        }
        value = value * 10 + u32::from(byte - b'0');
    }
    Ok(value)
}

/// Fixed-capacity non-negative decimal number, digits stored LSB-first.
///
/// Invariants: `1 <= len() <= capacity()` and every digit is in 0..=9.
/// A freshly created buffer represents zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitBuffer {
    digits: Vec<u8>,
    capacity: usize,
}

impl DigitBuffer {
    /// Create a buffer holding at most `capacity` digits, representing 0.
    pub fn with_capacity(capacity: usize) -> Result<Self, UtilError> {
        if capacity == 0 {
            return Err(UtilError::ZeroCapacity);
        }
        Ok(Self {
            digits: vec![0],
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of digits currently in use. Always at least 1.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// LSB-first view of the digits.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Overwrite the contents with the decimal digits of `k`.
    pub fn set_from_int(&mut self, k: u32) -> Result<(), UtilError> {
        let mut needed = 1;
        let mut probe = k;
        while probe >= 10 {
            probe /= 10;
            needed += 1;
        }
        if needed > self.capacity {
            return Err(UtilError::CapacityExceeded {
                capacity: self.capacity,
                needed,
            });
        }
        self.digits.clear();
        let mut k = k;
        loop {
            self.digits.push((k % 10) as u8);
            k /= 10;
            if k == 0 {
                break;
            }
        }
        Ok(())
    }

    /// Load from a big-endian digit array (most significant first), the
    /// layout array-form drills hand out.
    pub fn load_big_endian(&mut self, src: &[i32]) -> Result<(), UtilError> {
        if src.is_empty() {
            return Err(UtilError::Empty);
        }
        if src.len() > self.capacity {
            return Err(UtilError::CapacityExceeded {
                capacity: self.capacity,
                needed: src.len(),
            });
        }
        for &d in src {
            if !(0..=9).contains(&d) {
                return Err(UtilError::InvalidDigit(i64::from(d)));
            }
        }
        self.digits.clear();
        self.digits.extend(src.iter().rev().map(|&d| d as u8));
        Ok(())
    }

    /// Write `a + b` into `self`. Fails without modifying `self` if its
    /// capacity cannot hold `max(a.len(), b.len()) + 1` digits.
    pub fn add_into(&mut self, a: &DigitBuffer, b: &DigitBuffer) -> Result<(), UtilError> {
        let needed = a.len().max(b.len()) + 1;
        if self.capacity < needed {
            return Err(UtilError::CapacityExceeded {
                capacity: self.capacity,
                needed,
            });
        }
        let mut sum = add_lsb(&a.digits, &b.digits)?;
        // Drop a leading zero the schoolbook addition may leave, keeping the
        // canonical single-zero representation for zero.
        while sum.len() > 1 && sum.last() == Some(&0) {
            sum.pop();
        }
        self.digits = sum;
        Ok(())
    }

    /// Export as a big-endian `i32` array, the layout drills expect back.
    pub fn to_big_endian(&self) -> Vec<i32> {
        self.digits.iter().rev().map(|&d| i32::from(d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_digits_basics() {
        assert_eq!(count_digits(0), 1);
        assert_eq!(count_digits(7), 1);
        assert_eq!(count_digits(90_991), 5);
        assert_eq!(count_digits(-12_345), 5);
        assert_eq!(count_digits(i32::MIN), 10);
    }

    #[test]
    fn split_and_join_round_trip() {
        for k in [0, 1, 9, 10, 123, 90_991, 1_000_000] {
            assert_eq!(join_lsb(&split_lsb(k)), k, "round trip failed for {k}");
        }
        assert_eq!(split_lsb(120), vec![0, 2, 1]);
        assert_eq!(split_lsb(-45), vec![5, 4]);
        assert_eq!(join_lsb(&[]), 0);
    }

    #[test]
    fn zero_digit_detection() {
        assert!(has_zero_digit(0));
        assert!(has_zero_digit(101));
        assert!(has_zero_digit(909));
        assert!(!has_zero_digit(123));
        assert!(has_zero_digit(-105));
    }

    #[test]
    fn increment_ripples_and_wraps() {
        let mut d = vec![1, 2, 9];
        increment_big_endian(&mut d);
        assert_eq!(d, vec![1, 3, 0]);

        let mut d = vec![9, 9, 9];
        increment_big_endian(&mut d);
        assert_eq!(d, vec![0, 0, 0]);

        let mut d: Vec<u8> = vec![];
        increment_big_endian(&mut d);
        assert!(d.is_empty());
    }

    #[test]
    fn lsb_addition() {
        // 99 + 1 = 100
        assert_eq!(add_lsb(&[9, 9], &[1]).unwrap(), vec![0, 0, 1]);
        // 0 + 0 with empty operands
        assert_eq!(add_lsb(&[], &[]).unwrap(), vec![0]);
        assert_eq!(digit_sum(&[1, 2, 3]), 6);
        assert_eq!(
            add_lsb(&[10], &[1]),
            Err(UtilError::InvalidDigit(10))
        );
    }

    #[test]
    fn parse_u32_decimal_validates() {
        assert_eq!(parse_u32_decimal("0"), Ok(0));
        assert_eq!(parse_u32_decimal("2024"), Ok(2024));
        assert_eq!(parse_u32_decimal(""), Err(UtilError::Empty));
        assert!(parse_u32_decimal("12a").is_err());
        assert!(parse_u32_decimal("-5").is_err());
    }

    #[test]
    fn digit_buffer_round_trip() {
        let mut buf = DigitBuffer::with_capacity(8).unwrap();
        assert_eq!(buf.digits(), &[0]);
        for k in [0u32, 5, 10, 989, 12_345_678] {
            buf.set_from_int(k).unwrap();
            let be = buf.to_big_endian();
            let rebuilt: u32 = be.iter().fold(0, |acc, &d| acc * 10 + d as u32);
            assert_eq!(rebuilt, k);
        }
    }

    #[test]
    fn digit_buffer_capacity_checks() {
        assert_eq!(DigitBuffer::with_capacity(0), Err(UtilError::ZeroCapacity));
        let mut buf = DigitBuffer::with_capacity(2).unwrap();
        assert_eq!(
            buf.set_from_int(123),
            Err(UtilError::CapacityExceeded {
                capacity: 2,
                needed: 3
            })
        );
        assert!(buf.load_big_endian(&[1, 2, 3]).is_err());
        assert_eq!(buf.load_big_endian(&[]), Err(UtilError::Empty));
        assert!(buf.load_big_endian(&[1, 10]).is_err());
    }

    #[test]
    fn digit_buffer_addition() {
        let mut a = DigitBuffer::with_capacity(4).unwrap();
        let mut b = DigitBuffer::with_capacity(4).unwrap();
        let mut out = DigitBuffer::with_capacity(5).unwrap();
        a.set_from_int(989).unwrap();
        b.set_from_int(11).unwrap();
        out.add_into(&a, &b).unwrap();
        assert_eq!(out.to_big_endian(), vec![1, 0, 0, 0]);

        let mut small = DigitBuffer::with_capacity(3).unwrap();
        assert!(small.add_into(&a, &b).is_err());
    }
}
