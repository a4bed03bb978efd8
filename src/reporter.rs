//! Report rendering - turns an assessment into display lines and suggestions.

use crate::assessor::MIN_LENGTH;
use crate::report::AssessmentReport;

fn mark(flag: bool) -> char {
    if flag { '✓' } else { '✗' }
}

/// Builds the improvement suggestions for a report.
///
/// Each condition is checked independently, in fixed order: length, lowercase,
/// uppercase, digits, special. Note the length suggestion fires below
/// `MIN_LENGTH` (8), not below the Very Strong threshold, so an all-class
/// password of 8-11 characters gets no suggestions even though it does not
/// rate Very Strong.
pub fn suggestions(report: &AssessmentReport) -> Vec<String> {
    let checks: [(bool, &str); 5] = [
        (report.length < MIN_LENGTH, "Make it at least 8 characters long."),
        (!report.has_lower, "Add lowercase letters (a–z)."),
        (!report.has_upper, "Add uppercase letters (A–Z)."),
        (!report.has_digit, "Include digits (0–9)."),
        (!report.has_special, "Include special characters (e.g. !@#$%)."),
    ];

    checks
        .into_iter()
        .filter(|(failing, _)| *failing)
        .map(|(_, msg)| msg.to_string())
        .collect()
}

/// Renders a report as human-readable display lines, in fixed order:
/// strength label, per-criterion status, then either the suggestion list or
/// a single affirmative message.
pub fn render(report: &AssessmentReport) -> Vec<String> {
    let mut lines = vec![
        format!("Password Strength: {}", report.strength),
        format!(
            "- Length: {} characters {}",
            report.length,
            if report.length >= MIN_LENGTH { "(OK)" } else { "(too short)" }
        ),
        format!("- Lowercase letters: {}", mark(report.has_lower)),
        format!("- Uppercase letters: {}", mark(report.has_upper)),
        format!("- Digits: {}", mark(report.has_digit)),
        format!("- Special chars: {}", mark(report.has_special)),
        String::new(),
    ];

    let suggestions = suggestions(report);
    if suggestions.is_empty() {
        lines.push("Your password meets all recommended criteria!".to_string());
    } else {
        lines.push("Suggestions to improve your password:".to_string());
        for s in suggestions {
            lines.push(format!(" • {}", s));
        }
    }

    lines
}
