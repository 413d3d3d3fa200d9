//! # Caseless Ordering
//!
//! Name comparison that treats letters of differing case as equal.
//! Both sides are expanded to lowercase one character at a time and compared
//! lexicographically, so no intermediate `String` is allocated.

use std::cmp::Ordering;

/// Compares two names ignoring case.
pub fn cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Returns `true` when the two names differ only by case.
pub fn eq(a: &str, b: &str) -> bool {
    cmp(a, b) == Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_is_ignored() {
        assert!(eq("Charlie", "charlie"));
        assert!(eq("SHIRLY", "shirly"));
        assert_eq!(cmp("amy", "Charlie"), Ordering::Less);
        assert_eq!(cmp("Zed", "amy"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(cmp("Am", "amy"), Ordering::Less);
        assert_eq!(cmp("", "a"), Ordering::Less);
        assert!(eq("", ""));
    }
}
