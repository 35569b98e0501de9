//! Property-based tests for generation, validation and scoring.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::charset::{self, is_digit, is_special};
use super::{Strength, evaluate_strength, generate_password_with, validate_policy};
use crate::settings::Policy;

fn arb_policy() -> impl Strategy<Value = Policy> {
    (
        Policy::MIN_LENGTH..=Policy::MAX_LENGTH,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(length, numbers, special)| {
            Policy::new(length, numbers, special).expect("length drawn from valid range")
        })
}

proptest! {
    #[test]
    fn generated_length_matches_policy(policy in arb_policy(), seed in any::<u64>()) {
        let out = generate_password_with(&policy, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(out.password.chars().count(), policy.length());
    }

    #[test]
    fn generated_chars_come_from_alphabet(policy in arb_policy(), seed in any::<u64>()) {
        let alphabet = charset::build(&policy);
        let out = generate_password_with(&policy, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(out.password.chars().all(|c| alphabet.contains(&c)));
    }

    #[test]
    fn generated_password_passes_its_policy(policy in arb_policy(), seed in any::<u64>()) {
        let out = generate_password_with(&policy, &mut StdRng::seed_from_u64(seed)).unwrap();
        let chars: Vec<char> = out.password.chars().collect();
        match (policy.include_numbers(), policy.include_special_chars()) {
            (true, false) => prop_assert!(chars.iter().any(|&c| is_digit(c))),
            (false, true) => prop_assert!(chars.iter().any(|&c| is_special(c))),
            (true, true) => prop_assert!(
                chars.windows(2).any(|w| is_special(w[0]) && is_digit(w[1]))
            ),
            (false, false) => prop_assert!(chars.iter().all(|c| c.is_ascii_alphabetic())),
        }
    }

    #[test]
    fn strength_matches_policy_length(policy in arb_policy(), seed in any::<u64>()) {
        let out = generate_password_with(&policy, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(Some(out.strength), Strength::from_length(policy.length()));
    }

    #[test]
    fn strength_only_depends_on_length(a in "[ -~]{8,24}", fill in any::<char>()) {
        let same_len: String = std::iter::repeat_n(fill, a.chars().count()).collect();
        prop_assert_eq!(evaluate_strength(&a), evaluate_strength(&same_len));
    }

    #[test]
    fn validation_is_idempotent(password in "[ -~]{0,30}", policy in arb_policy()) {
        prop_assert_eq!(
            validate_policy(&password, &policy),
            validate_policy(&password, &policy)
        );
    }
}
