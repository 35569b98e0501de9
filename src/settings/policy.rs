//! Character-class policy for a single generation call.

use crate::error::{Error, Result};

/// What a generated password must look like.
///
/// Fields are private so every `Policy` in circulation has a length in
/// `MIN_LENGTH..=MAX_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    length: usize,
    include_numbers: bool,
    include_special_chars: bool,
}

impl Policy {
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 24;

    pub fn new(length: usize, include_numbers: bool, include_special_chars: bool) -> Result<Self> {
        check_length(length)?;
        Ok(Self {
            length,
            include_numbers,
            include_special_chars,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn include_numbers(&self) -> bool {
        self.include_numbers
    }

    pub fn include_special_chars(&self) -> bool {
        self.include_special_chars
    }

    /// Copy of this policy with a different length.
    pub fn with_length(self, length: usize) -> Result<Self> {
        check_length(length)?;
        Ok(Self { length, ..self })
    }

    pub fn with_numbers(self, include_numbers: bool) -> Self {
        Self {
            include_numbers,
            ..self
        }
    }

    pub fn with_special_chars(self, include_special_chars: bool) -> Self {
        Self {
            include_special_chars,
            ..self
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            length: Self::MIN_LENGTH,
            include_numbers: false,
            include_special_chars: false,
        }
    }
}

fn check_length(length: usize) -> Result<()> {
    if (Policy::MIN_LENGTH..=Policy::MAX_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(Error::InvalidPolicy {
            length,
            min: Policy::MIN_LENGTH,
            max: Policy::MAX_LENGTH,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Policy::new(8, false, false).unwrap().length(), 8);
        assert_eq!(Policy::new(24, true, true).unwrap().length(), 24);
    }

    #[test]
    fn rejects_out_of_range_without_clamping() {
        assert_eq!(
            Policy::new(7, false, false),
            Err(Error::InvalidPolicy {
                length: 7,
                min: 8,
                max: 24
            })
        );
        assert!(Policy::new(25, true, false).is_err());
        assert!(Policy::new(0, false, true).is_err());
    }

    #[test]
    fn with_length_keeps_flags() {
        let policy = Policy::new(10, true, true).unwrap();
        let longer = policy.with_length(20).unwrap();
        assert_eq!(longer.length(), 20);
        assert!(longer.include_numbers());
        assert!(longer.include_special_chars());
        assert!(policy.with_length(30).is_err());
    }

    #[test]
    fn default_is_shortest_letters_only() {
        let policy = Policy::default();
        assert_eq!(policy.length(), Policy::MIN_LENGTH);
        assert!(!policy.include_numbers());
        assert!(!policy.include_special_chars());
    }
}
