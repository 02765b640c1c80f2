//! Small string and character helpers.

/// Convert `source` to camelCase.
///
/// Only ASCII alphabetic characters are copied. A letter is capitalized when
/// the character immediately before it in the source was a space, except for
/// the very first letter emitted; every other letter is lowercased. Digits,
/// punctuation and the spaces themselves are dropped.
pub fn to_camel_case(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut prev = None;
    for c in source.chars() {
        if c.is_ascii_alphabetic() {
            if prev == Some(' ') && !out.is_empty() {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c.to_ascii_lowercase());
            }
        }
        prev = Some(c);
    }
    out
}

/// True for `(`, `{`, `[`.
pub fn is_open_paren(c: char) -> bool {
    matches!(c, '(' | '{' | '[')
}

/// True for `)`, `}`, `]`.
pub fn is_close_paren(c: char) -> bool {
    matches!(c, ')' | '}' | ']')
}

/// The partner of a bracket character in either direction, or `None` for
/// anything that is not a recognized bracket.
pub fn matching_paren(c: char) -> Option<char> {
    match c {
        '(' => Some(')'),
        ')' => Some('('),
        '{' => Some('}'),
        '}' => Some('{'),
        '[' => Some(']'),
        ']' => Some('['),
        _ => None,
    }
}
