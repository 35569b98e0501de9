//! Password generation, validation and strength scoring.

pub mod charset;
mod generate;
pub mod strength;
mod validate;

#[cfg(test)]
mod proptest;

use rand::Rng;

use crate::error::{Error, Result};
use crate::settings::Policy;

pub use generate::{generate, generate_from_charset};
pub use strength::Strength;
pub use validate::validate;

/// An accepted password and its strength tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub password: String,
    pub strength: Strength,
}

/// Generate a password for `policy` using the thread-local RNG.
pub fn generate_password(policy: &Policy) -> Result<Generated> {
    generate_password_with(policy, &mut rand::rng())
}

/// Generate a password for `policy` from an explicit random source.
pub fn generate_password_with<R: Rng + ?Sized>(policy: &Policy, rng: &mut R) -> Result<Generated> {
    let password = generate(policy, rng);
    let strength = strength::evaluate(&password).ok_or(Error::InvalidPolicy {
        length: policy.length(),
        min: Policy::MIN_LENGTH,
        max: Policy::MAX_LENGTH,
    })?;
    Ok(Generated { password, strength })
}

pub fn evaluate_strength(password: &str) -> Option<Strength> {
    strength::evaluate(password)
}

pub fn validate_policy(password: &str, policy: &Policy) -> bool {
    validate(password, policy)
}
