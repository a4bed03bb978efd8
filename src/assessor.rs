//! Password assessor - main classification logic.

use secrecy::{ExposeSecret, SecretString};

use crate::report::{AssessmentReport, Strength};

/// Minimum length for a password to rate above Weak; also the threshold
/// reported by the length line and the length suggestion.
pub const MIN_LENGTH: usize = 8;

/// Minimum length for the Strong rating.
pub const STRONG_MIN_LENGTH: usize = 10;

/// Minimum length for the Very Strong rating.
pub const VERY_STRONG_MIN_LENGTH: usize = 12;

/// Assesses a password and returns a detailed report.
///
/// Total over all inputs: the empty string yields a valid report (length 0,
/// all flags false, Weak). No side effects.
///
/// # Arguments
/// * `password` - The password to assess
///
/// # Returns
/// An `AssessmentReport` containing the class flags and derived strength.
pub fn assess(password: &SecretString) -> AssessmentReport {
    let pwd = password.expose_secret();

    let length = pwd.chars().count();
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| !c.is_ascii_alphanumeric());

    let criteria_met = [has_lower, has_upper, has_digit, has_special]
        .iter()
        .filter(|&&b| b)
        .count();

    // First match wins
    let strength = if length >= VERY_STRONG_MIN_LENGTH && criteria_met == 4 {
        Strength::VeryStrong
    } else if length >= STRONG_MIN_LENGTH && criteria_met >= 3 {
        Strength::Strong
    } else if length >= MIN_LENGTH && criteria_met >= 2 {
        Strength::Moderate
    } else {
        Strength::Weak
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(length, criteria_met, ?strength, "password assessed");

    AssessmentReport {
        length,
        has_lower,
        has_upper,
        has_digit,
        has_special,
        strength,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_assess_empty_password() {
        let report = assess(&secret(""));
        assert_eq!(report.length, 0);
        assert!(!report.has_lower);
        assert!(!report.has_upper);
        assert!(!report.has_digit);
        assert!(!report.has_special);
        assert_eq!(report.strength, Strength::Weak);
    }

    #[test]
    fn test_assess_long_single_class_is_weak() {
        // length >= 8 alone is not enough; two classes are required
        let report = assess(&secret("abcdefgh"));
        assert_eq!(report.length, 8);
        assert!(report.has_lower);
        assert!(!report.has_upper);
        assert!(!report.has_digit);
        assert!(!report.has_special);
        assert_eq!(report.criteria_met(), 1);
        assert_eq!(report.strength, Strength::Weak);
    }

    #[test]
    fn test_assess_moderate_below_strong_length() {
        // three classes but length 9 falls short of the Strong threshold
        let report = assess(&secret("Abcdefgh1"));
        assert_eq!(report.length, 9);
        assert_eq!(report.criteria_met(), 3);
        assert_eq!(report.strength, Strength::Moderate);
    }

    #[test]
    fn test_assess_strong_password() {
        let report = assess(&secret("Abcdefgh12"));
        assert_eq!(report.length, 10);
        assert_eq!(report.criteria_met(), 3);
        assert_eq!(report.strength, Strength::Strong);
    }

    #[test]
    fn test_assess_very_strong_password() {
        let report = assess(&secret("Abcdefgh12!@"));
        assert_eq!(report.length, 12);
        assert!(report.has_lower);
        assert!(report.has_upper);
        assert!(report.has_digit);
        assert!(report.has_special);
        assert_eq!(report.strength, Strength::VeryStrong);
    }

    #[test]
    fn test_assess_very_strong_requires_all_four_classes() {
        // 12+ chars, only three classes: classifies as Strong
        let report = assess(&secret("Abcdefghij12"));
        assert_eq!(report.length, 12);
        assert_eq!(report.criteria_met(), 3);
        assert_eq!(report.strength, Strength::Strong);
    }

    #[test]
    fn test_assess_length_counts_chars_not_bytes() {
        let report = assess(&secret("päss"));
        assert_eq!(report.length, 4);
    }

    #[test]
    fn test_assess_non_ascii_counts_as_special() {
        // 'Ä' is a letter, but the classes are ASCII-only
        let report = assess(&secret("Ä"));
        assert!(!report.has_lower);
        assert!(!report.has_upper);
        assert!(!report.has_digit);
        assert!(report.has_special);
    }

    #[test]
    fn test_assess_length_preserved() {
        for s in ["", "a", "abc123", "Abcdefgh12!@", "a b c"] {
            assert_eq!(assess(&secret(s)).length, s.chars().count());
        }
    }

    #[test]
    fn test_assess_length_monotonicity() {
        // For a fixed set of satisfied classes, growing the password never
        // lowers the rating.
        let mut prev = Strength::Weak;
        for n in 1..=16 {
            // repeats "Ab1!" to keep all four classes present at every length
            let pwd: String = "Ab1!".chars().cycle().take(n).collect();
            let report = assess(&secret(&pwd));
            if report.criteria_met() == 4 {
                assert!(report.strength >= prev, "rating dropped at length {}", n);
                prev = report.strength;
            }
        }
        assert_eq!(prev, Strength::VeryStrong);
    }
}
