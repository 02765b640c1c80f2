//! Roman numeral parsing.

/// Value of a single Roman numeral character, or `None` for anything else.
pub fn char_value(c: char) -> Option<i32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Convert a Roman numeral string to its integer value.
///
/// Scans right to left: a symbol smaller than the one to its right is
/// subtracted, otherwise added, which handles subtractive pairs like `IV`
/// and `CM` without special cases. Unknown characters contribute 0 and do
/// not disturb the comparison state.
pub fn roman_to_int(s: &str) -> i32 {
    let mut total = 0;
    let mut prev = 0;
    for c in s.chars().rev() {
        let Some(v) = char_value(c) else { continue };
        if v < prev {
            total -= v;
        } else {
            total += v;
        }
        prev = v;
    }
    total
}
