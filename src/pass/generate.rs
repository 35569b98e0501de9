//! Password generation.

use rand::Rng;
use tracing::{debug, trace};
use zeroize::Zeroize;

use super::charset;
use super::validate::validate;
use crate::settings::Policy;

/// Generate a password satisfying `policy`.
///
/// Candidates are sampled in full and thrown away until one passes
/// validation. There is no attempt limit: termination relies on the alphabet
/// holding at least one character of every class the policy enables.
pub fn generate<R: Rng + ?Sized>(policy: &Policy, rng: &mut R) -> String {
    let chars = charset::build(policy);
    debug_assert!(covers_policy(&chars, policy));

    let mut buf = String::with_capacity(policy.length());
    let mut attempts: u64 = 0;

    loop {
        attempts += 1;
        generate_from_charset(&chars, policy.length(), &mut buf, rng);
        if validate(&buf, policy) {
            debug!(attempts, length = policy.length(), "password accepted");
            return buf;
        }
        trace!(attempt = attempts, "candidate rejected");
        buf.zeroize();
    }
}

/// Fill `buf` with `length` characters drawn uniformly from `chars`.
/// Caller owns the buffer and clears it between calls.
#[inline]
pub fn generate_from_charset<R: Rng + ?Sized>(
    chars: &[char],
    length: usize,
    buf: &mut String,
    rng: &mut R,
) {
    buf.clear();
    buf.extend((0..length).map(|_| random_char(chars, rng)));
}

#[inline]
fn random_char<R: Rng + ?Sized>(chars: &[char], rng: &mut R) -> char {
    chars[rng.random_range(0..chars.len())]
}

fn covers_policy(chars: &[char], policy: &Policy) -> bool {
    let has = |pred: fn(char) -> bool| chars.iter().any(|&c| pred(c));
    (!policy.include_numbers() || has(charset::is_digit))
        && (!policy.include_special_chars() || has(charset::is_special))
}
