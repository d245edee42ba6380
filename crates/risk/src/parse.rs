//! Parsing of the model's free-text risk analysis.

use syntria_common::RiskLevel;

/// First-match substring scan over the response text.
///
/// "HIGH" anywhere wins, then "MEDIUM"; anything else (including ambiguous
/// text) defaults to LOW.
pub fn detect_risk_level(text: &str) -> RiskLevel {
    if text.contains("HIGH") {
        RiskLevel::High
    } else if text.contains("MEDIUM") {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Extract bullet reasons from the response text.
///
/// A line counts when, after trimming, it starts with `-` or `<digits>.`.
/// The marker is stripped, empty survivors are dropped, and at most `cap`
/// reasons are kept in original order.
pub fn extract_reasons(text: &str, cap: usize) -> Vec<String> {
    text.lines()
        .filter_map(|line| strip_marker(line.trim()))
        .filter(|reason| !reason.is_empty())
        .take(cap)
        .collect()
}

fn strip_marker(line: &str) -> Option<String> {
    if let Some(rest) = line.strip_prefix('-') {
        return Some(rest.trim().to_string());
    }
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 && line[digits..].starts_with('.') {
        return Some(line[digits + 1..].trim().to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_high_before_medium() {
        assert_eq!(
            detect_risk_level("Risk: HIGH. Could have been MEDIUM."),
            RiskLevel::High
        );
    }

    #[test]
    fn detects_medium() {
        assert_eq!(detect_risk_level("overall MEDIUM risk"), RiskLevel::Medium);
    }

    #[test]
    fn defaults_to_low() {
        assert_eq!(detect_risk_level("looks fine"), RiskLevel::Low);
        assert_eq!(detect_risk_level(""), RiskLevel::Low);
    }

    #[test]
    fn substring_match_is_case_sensitive() {
        assert_eq!(detect_risk_level("high risk, honestly"), RiskLevel::Low);
    }

    #[test]
    fn extracts_mixed_bullet_styles() {
        let text = "- reason one\n2. reason two\nnot a reason\n- reason three";
        assert_eq!(
            extract_reasons(text, 5),
            vec!["reason one", "reason two", "reason three"]
        );
    }

    #[test]
    fn caps_reason_count() {
        let text = "- a\n- b\n- c\n- d\n- e\n- f\n- g";
        assert_eq!(extract_reasons(text, 5), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn drops_empty_bullets_and_trims() {
        let text = "-\n-   \n1.   padded reason   \n10. double digit";
        assert_eq!(
            extract_reasons(text, 5),
            vec!["padded reason", "double digit"]
        );
    }

    #[test]
    fn no_bullets_yields_empty() {
        assert!(extract_reasons("prose only, no list here", 5).is_empty());
    }
}
