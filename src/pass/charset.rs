//! Character set building for password generation.

use crate::settings::Policy;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};:'\",.<>?/`~";

/// Build the alphabet a policy draws from. Letters are always present.
pub fn build(policy: &Policy) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(size(policy));

    chars.extend(LOWERCASE.chars());
    chars.extend(UPPERCASE.chars());

    if policy.include_numbers() {
        chars.extend(DIGITS.chars());
    }

    if policy.include_special_chars() {
        chars.extend(SPECIAL_CHARS.chars());
    }

    chars
}

/// Alphabet size for a policy, without building it.
pub fn size(policy: &Policy) -> usize {
    let mut size = LOWERCASE.len() + UPPERCASE.len();
    if policy.include_numbers() {
        size += DIGITS.len();
    }
    if policy.include_special_chars() {
        size += SPECIAL_CHARS.len();
    }
    size
}

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}
