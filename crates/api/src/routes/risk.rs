//! Risk-scoring endpoint.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::Result,
    Json,
};
use chrono::Utc;
use syntria_common::{OnboardingSubject, RiskAssessment};
use tracing::{error, info, instrument};

use crate::server::AppState;
use crate::types::ErrorResponse;

/// Base64 uploads can be large; match the front end's limit.
const MAX_BODY_BYTES: usize = 10_000_000;

/// Extract and parse the onboarding subject with detailed error reporting
#[instrument(skip(request))]
async fn extract_subject(
    request: Request,
) -> Result<OnboardingSubject, (StatusCode, Json<ErrorResponse>)> {
    let body = match axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "Failed to read request body");
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read request body: {}", e),
                    code: Some("BODY_READ_ERROR".to_string()),
                    timestamp: Utc::now(),
                }),
            ));
        }
    };

    match serde_json::from_slice::<OnboardingSubject>(&body) {
        Ok(subject) => Ok(subject),
        Err(e) => {
            error!(
                error = %e,
                line = e.line(),
                column = e.column(),
                "Failed to parse onboarding subject"
            );
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!(
                        "Invalid JSON at line {}, column {}: {}",
                        e.line(),
                        e.column(),
                        e
                    ),
                    code: Some("JSON_PARSE_ERROR".to_string()),
                    timestamp: Utc::now(),
                }),
            ))
        }
    }
}

/// Score an onboarding subject
///
/// Classifies the subject via Gemini when a key is configured, else via the
/// deterministic rule table. Provider faults never fail the request: the
/// fallback numbers come back with an advisory `error` field, still as 200.
#[utoipa::path(
    post,
    path = "/api/risk-score",
    tag = "risk",
    request_body = OnboardingSubject,
    responses(
        (status = 200, description = "Risk assessment, AI-backed or rule-based", body = RiskAssessment),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn risk_score(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<RiskAssessment>, (StatusCode, Json<ErrorResponse>)> {
    let subject = extract_subject(request).await?;

    info!(
        company = %subject.company_name,
        country = %subject.country,
        has_pii = subject.has_pii,
        has_controls = subject.has_controls,
        uploaded_files = subject.uploaded_files.len(),
        ai_path = state.classifier.has_model(),
        "Scoring onboarding subject"
    );

    let assessment = state.classifier.assess(&subject).await;

    info!(
        company = %subject.company_name,
        risk_level = %assessment.risk_level,
        score = assessment.score,
        degraded = assessment.error.is_some(),
        "Risk assessment complete"
    );

    Ok(Json(assessment))
}
