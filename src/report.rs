//! Assessment report types
//!
//! The report is an immutable snapshot produced per password assessed;
//! nothing here outlives the single assess/render cycle.

use std::fmt;

/// Categorical strength rating, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        };
        write!(f, "{}", label)
    }
}

/// Result of assessing a single password.
///
/// `strength` is fully determined by `length` and the four class flags.
/// Character classes are ASCII-only: anything outside `[A-Za-z0-9]` counts
/// as special, including non-ASCII letters and digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentReport {
    /// Character count of the input (Unicode scalar values, not bytes).
    pub length: usize,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_special: bool,
    pub strength: Strength,
}

impl AssessmentReport {
    /// Number of satisfied character-class flags (0-4). Length is not a
    /// criterion here; it enters the classification separately.
    pub fn criteria_met(&self) -> usize {
        [self.has_lower, self.has_upper, self.has_digit, self.has_special]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}
