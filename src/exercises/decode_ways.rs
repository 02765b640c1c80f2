//! Decode Ways: count decodings of a digit string under the mapping
//! `1 -> A` .. `26 -> Z`. A leading zero kills the containing code.

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// Number of ways to decode `s`. The empty string decodes one way (to the
/// empty message).
pub fn solve(s: &str) -> u64 {
    let digits = s.as_bytes();
    // dp over prefixes, rolled into two variables.
    let mut two_back = 1u64;
    let mut one_back = 1u64;
    for (i, &d) in digits.iter().enumerate() {
        let mut here = 0;
        if d != b'0' {
            here += one_back;
        }
        if i > 0 {
            let pair = (digits[i - 1] - b'0') * 10 + (d - b'0');
            if (10..=26).contains(&pair) {
                here += two_back;
            }
        }
        two_back = one_back;
        one_back = here;
    }
    one_back
}

/// Branch on taking one or two digits at each position.
fn count_decodings(digits: &[u8], i: usize) -> u64 {
    if i == digits.len() {
        return 1;
    }
    if digits[i] == b'0' {
        return 0;
    }
    let mut total = count_decodings(digits, i + 1);
    if i + 1 < digits.len() {
        let pair = (digits[i] - b'0') * 10 + (digits[i + 1] - b'0');
        if pair <= 26 {
            total += count_decodings(digits, i + 2);
        }
    }
    total
}

pub struct DecodeWays;

impl Exercise for DecodeWays {
    type Input = String;
    type Output = u64;

    fn name(&self) -> &'static str {
        "decode_ways"
    }

    fn solve(&self, input: &String) -> u64 {
        solve(input)
    }

    fn oracle(&self, input: &String) -> u64 {
        count_decodings(input.as_bytes(), 0)
    }

    fn deterministic_cases(&self) -> Vec<(String, u64)> {
        vec![
            ("12".to_owned(), 2),
            ("226".to_owned(), 3),
            ("06".to_owned(), 0),
            ("11106".to_owned(), 2),
            ("10".to_owned(), 1),
            ("27".to_owned(), 1),
        ]
    }

    fn random_input(&self, rng: &mut Lcg32) -> String {
        let len = rng.int_in(1, 8) as usize;
        rng.string_from(b"01234", len)
    }

    fn random_trials(&self) -> usize {
        25
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_examples() {
        assert_eq!(solve("12"), 2);
        assert_eq!(solve("226"), 3);
        assert_eq!(solve("06"), 0);
        assert_eq!(solve("11106"), 2);
    }

    #[test]
    fn zero_handling() {
        assert_eq!(solve("0"), 0);
        assert_eq!(solve("10"), 1);
        assert_eq!(solve("100"), 0);
        assert_eq!(solve("27"), 1);
    }

    #[test]
    fn empty_string_decodes_one_way() {
        assert_eq!(solve(""), 1);
        assert_eq!(count_decodings(b"", 0), 1);
    }
}
