//! The classifier proper: AI path with rule-based backstop.

use crate::fallback::fallback_assessment;
use crate::gemini::{GeminiClient, GenerativeModel};
use crate::{parse, prompt};
use std::sync::Arc;
use syntria_common::{OnboardingSubject, RiskAssessment, RiskConfig};

/// Reason substituted when the model answered but no bullet lines survived.
pub const GENERIC_REASON: &str = "Analysis complete based on submitted documents";

/// Produces a risk assessment for every subject, without exception.
///
/// Whether the AI path exists at all is decided once at construction from
/// the environment; per-call failures degrade to the rule-based fallback.
pub struct RiskClassifier {
    model: Option<Arc<dyn GenerativeModel>>,
    max_reasons: usize,
}

impl RiskClassifier {
    /// Build from configuration, wiring up Gemini when an API key is present.
    pub fn from_config(config: &RiskConfig) -> Self {
        match syntria_common::config::gemini_api_key() {
            Some(api_key) => match GeminiClient::new(api_key, config) {
                Ok(client) => {
                    tracing::info!(model = %config.model, "AI risk analysis enabled");
                    Self {
                        model: Some(Arc::new(client)),
                        max_reasons: config.max_reasons,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to build Gemini client, rule-based scoring only");
                    Self::rule_based(config.max_reasons)
                }
            },
            None => {
                tracing::info!("No Gemini API key configured, rule-based scoring only");
                Self::rule_based(config.max_reasons)
            }
        }
    }

    /// Classifier with an explicit provider, used by tests.
    pub fn with_model(model: Arc<dyn GenerativeModel>, max_reasons: usize) -> Self {
        Self {
            model: Some(model),
            max_reasons,
        }
    }

    /// Classifier that only ever runs the rule table.
    pub fn rule_based(max_reasons: usize) -> Self {
        Self {
            model: None,
            max_reasons,
        }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Assess a subject. Infallible: every failure path resolves to the
    /// deterministic fallback, with the provider fault attached as an
    /// advisory `error`.
    pub async fn assess(&self, subject: &OnboardingSubject) -> RiskAssessment {
        let Some(model) = &self.model else {
            return fallback_assessment(subject);
        };

        match self.assess_with_model(model.as_ref(), subject).await {
            Ok(assessment) => assessment,
            Err(e) => {
                tracing::warn!(
                    company = %subject.company_name,
                    error = %e,
                    "AI risk analysis failed, falling back to rule-based scoring"
                );
                let mut assessment = fallback_assessment(subject);
                assessment.error = Some(format!("Gemini failed: {e:#}"));
                assessment
            }
        }
    }

    async fn assess_with_model(
        &self,
        model: &dyn GenerativeModel,
        subject: &OnboardingSubject,
    ) -> anyhow::Result<RiskAssessment> {
        let parts = prompt::build_parts(subject);
        let text = model.generate(parts).await?;
        tracing::debug!(response = %text, "Gemini risk analysis");

        let risk_level = parse::detect_risk_level(&text);
        let mut reasons = parse::extract_reasons(&text, self.max_reasons);
        if reasons.is_empty() {
            reasons.push(GENERIC_REASON.to_string());
        }

        Ok(RiskAssessment {
            risk_level,
            score: risk_level.representative_score(),
            reasons,
            error: None,
        })
    }
}
