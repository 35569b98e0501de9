//! Error types for password generation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Requested length is outside the supported range. Never clamped.
    #[error("invalid policy: length {length} is outside {min}..={max}")]
    InvalidPolicy {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("entropy source unavailable: {0}")]
    Entropy(String),
}
