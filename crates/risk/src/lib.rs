//! # Risk Classifier
//!
//! Decides LOW/MEDIUM/HIGH compliance risk for an onboarding subject.
//!
//! Two paths produce an assessment:
//!
//! - **AI path**: when a Gemini API key is configured, the subject (and any
//!   uploaded documents, inline as base64) is sent to the model and the free-
//!   text answer is parsed into a level, a score and a reasons list.
//! - **Rule-based fallback**: a fixed point-additive table over the subject's
//!   PII/controls/country flags.
//!
//! The classifier never fails past its boundary: a missing key routes to the
//! fallback silently, and any provider fault is caught, scored by the
//! fallback, and surfaced only as an advisory `error` string on a still-valid
//! assessment. Callers always get a decision.

pub mod classifier;
pub mod fallback;
pub mod gemini;
pub mod parse;
pub mod prompt;

pub use classifier::RiskClassifier;
pub use fallback::fallback_assessment;
pub use gemini::{GeminiClient, GenerativeModel};
