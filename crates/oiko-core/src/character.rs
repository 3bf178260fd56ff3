// Case utilities for suggestion generation.
//
// Suggestion generators flip the case of single characters while
// editing candidate words. `char::to_lowercase` can expand to multiple
// characters for some scripts, which would change word length mid-edit,
// so these helpers only apply mappings that stay single-character and
// leave everything else untouched.

/// Lowercase a character if its lowercase form is a single character,
/// otherwise return it unchanged.
pub fn simple_lower(c: char) -> char {
    let mut it = c.to_lowercase();
    match (it.next(), it.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Uppercase a character if its uppercase form is a single character,
/// otherwise return it unchanged.
pub fn simple_upper(c: char) -> char {
    let mut it = c.to_uppercase();
    match (it.next(), it.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Whether the character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c.is_alphabetic() && c != simple_lower(c)
}

/// Whether the character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c.is_alphabetic() && c != simple_upper(c)
}

/// Case-insensitive comparison of two character slices.
pub fn equals_ignore_case(a: &[char], b: &[char]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(&ca, &cb)| simple_lower(ca) == simple_lower(cb))
}
