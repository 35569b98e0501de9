//! Policy-driven password generation.
//!
//! A [`Policy`] fixes the length (8 to 24) and whether digits and special
//! characters are included. [`generate_password`] resamples until the result
//! satisfies the policy and returns it with its [`Strength`] tier.
//!
//! ```
//! use passgen::{Policy, Strength, generate_password};
//!
//! let policy = Policy::new(16, true, false).unwrap();
//! let out = generate_password(&policy).unwrap();
//! assert_eq!(out.password.len(), 16);
//! assert!(out.password.chars().any(|c| c.is_ascii_digit()));
//! assert_eq!(out.strength, Strength::Strong);
//! ```

pub mod entropy;
pub mod error;
pub mod pass;
pub mod settings;

pub use error::{Error, Result};
pub use pass::{
    Generated, Strength, evaluate_strength, generate_password, generate_password_with,
    validate_policy,
};
pub use settings::{Policy, Settings};
