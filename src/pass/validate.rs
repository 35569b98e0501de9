//! Character-class checks for generated candidates.

use super::charset::{is_digit, is_special};
use crate::settings::Policy;

/// Check a candidate against the character classes its policy asks for.
///
/// With both numbers and special characters enabled, a special character must
/// be directly followed by a digit somewhere in the candidate. One of each at
/// arbitrary positions is not enough.
pub fn validate(candidate: &str, policy: &Policy) -> bool {
    match (policy.include_numbers(), policy.include_special_chars()) {
        (true, false) => candidate.chars().any(is_digit),
        (false, true) => candidate.chars().any(is_special),
        (true, true) => has_special_then_digit(candidate),
        (false, false) => true,
    }
}

fn has_special_then_digit(candidate: &str) -> bool {
    let mut prev_special = false;
    for c in candidate.chars() {
        if prev_special && is_digit(c) {
            return true;
        }
        prev_special = is_special(c);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(numbers: bool, special: bool) -> Policy {
        Policy::new(8, numbers, special).unwrap()
    }

    #[test]
    fn no_constraints_always_pass() {
        let p = policy(false, false);
        assert!(validate("abcdefgh", &p));
        assert!(validate("", &p));
    }

    #[test]
    fn numbers_need_a_digit() {
        let p = policy(true, false);
        assert!(validate("abcdefg1", &p));
        assert!(!validate("abcdefgh", &p));
    }

    #[test]
    fn specials_need_a_special() {
        let p = policy(false, true);
        assert!(validate("abc#defg", &p));
        assert!(!validate("abcdefgh", &p));
        assert!(!validate("abcdefg1", &p));
    }

    #[test]
    fn both_need_adjacent_special_then_digit() {
        let p = policy(true, true);
        assert!(validate("abc!1def", &p));
        assert!(validate("ab[]][9x", &p));
        // one of each, not adjacent
        assert!(!validate("a!bcdef1", &p));
        // wrong order
        assert!(!validate("abc1!def", &p));
        // two digits do not count as special + digit
        assert!(!validate("abc12def", &p));
    }

    #[test]
    fn is_idempotent() {
        let p = policy(true, true);
        for candidate in ["abc!1def", "a!bcdef1", "zzzzzzzz"] {
            assert_eq!(validate(candidate, &p), validate(candidate, &p));
        }
    }
}
