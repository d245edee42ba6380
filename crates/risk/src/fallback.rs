//! Deterministic rule-based scoring used when the AI path is unavailable.

use syntria_common::{OnboardingSubject, RiskAssessment, RiskLevel};

pub const FALLBACK_REASON: &str = "Rule-based fallback";

/// Fixed point-additive rule table.
///
/// Base 20, +30 for PII, +25 for missing security controls, +15 for a
/// non-USA country, classified by the shared score bands. Pure function of
/// the subject; identical input yields identical output.
pub fn fallback_assessment(subject: &OnboardingSubject) -> RiskAssessment {
    let mut score: u8 = 20;
    if subject.has_pii {
        score += 30;
    }
    if !subject.has_controls {
        score += 25;
    }
    if subject.country != "USA" {
        score += 15;
    }

    RiskAssessment {
        risk_level: RiskLevel::from_score(score),
        score,
        reasons: vec![FALLBACK_REASON.to_string()],
        error: None,
    }
}
