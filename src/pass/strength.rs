//! Length-based strength tiers.

use std::fmt;

/// Strength tier of a password. Ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak = 1,
    Fair = 2,
    Strong = 3,
    VeryStrong = 4,
}

impl Strength {
    pub const ALL: [Strength; 4] = [
        Strength::Weak,
        Strength::Fair,
        Strength::Strong,
        Strength::VeryStrong,
    ];

    /// Tier for a length, or `None` outside `8..=24`.
    pub fn from_length(length: usize) -> Option<Self> {
        match length {
            8..=11 => Some(Strength::Weak),
            12..=15 => Some(Strength::Fair),
            16..=19 => Some(Strength::Strong),
            20..=24 => Some(Strength::VeryStrong),
            _ => None,
        }
    }

    pub fn score(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score a password by its character count.
pub fn evaluate(password: &str) -> Option<Strength> {
    Strength::from_length(password.chars().count())
}

/// Numeric score with 0 standing in for "no tier".
pub fn score(strength: Option<Strength>) -> u8 {
    strength.map_or(0, Strength::score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn of_len(n: usize) -> String {
        "x".repeat(n)
    }

    #[test]
    fn band_midpoints() {
        assert_eq!(evaluate(&of_len(10)), Some(Strength::Weak));
        assert_eq!(evaluate(&of_len(14)), Some(Strength::Fair));
        assert_eq!(evaluate(&of_len(18)), Some(Strength::Strong));
        assert_eq!(evaluate(&of_len(22)), Some(Strength::VeryStrong));
    }

    #[test]
    fn band_edges() {
        assert_eq!(score(evaluate(&of_len(8))), 1);
        assert_eq!(score(evaluate(&of_len(11))), 1);
        assert_eq!(score(evaluate(&of_len(12))), 2);
        assert_eq!(score(evaluate(&of_len(15))), 2);
        assert_eq!(score(evaluate(&of_len(16))), 3);
        assert_eq!(score(evaluate(&of_len(20))), 4);
        assert_eq!(score(evaluate(&of_len(24))), 4);
    }

    #[test]
    fn outside_bands_has_no_tier() {
        assert_eq!(evaluate(&of_len(7)), None);
        assert_eq!(evaluate(&of_len(25)), None);
        assert_eq!(evaluate(""), None);
        assert_eq!(score(None), 0);
    }

    #[test]
    fn counts_chars_not_bytes() {
        // 8 chars, 16 bytes
        assert_eq!(evaluate("éééééééé"), Some(Strength::Weak));
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(Strength::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Strength::VeryStrong.to_string(), "Very Strong");
    }
}
