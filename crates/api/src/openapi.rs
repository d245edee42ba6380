//! OpenAPI Specification Configuration
//!
//! The specification is generated from Rust types and route handlers using
//! utoipa and served through Swagger UI at `/docs`.

/// OpenAPI specification for the Syntria API
#[derive(utoipa::OpenApi)]
#[openapi(
    info(
        title = "Syntria API",
        description = "
# Syntria API Documentation

REST backend for vendor/client onboarding with AI-assisted risk scoring.

## Overview

- **Risk scoring**: POST an onboarding subject to `/api/risk-score` and get a
  LOW/MEDIUM/HIGH assessment with a 0-100 score and actionable reasons.
  When a Gemini API key is configured the assessment comes from document
  analysis; otherwise (or on any provider fault) a deterministic rule table
  answers. The endpoint always produces a decision.
- **Entities**: CRUD over onboarded vendor/client records.
- **Audit**: append-only trail of compliance-relevant actions.

## Degrade-not-fail

Provider faults never surface as HTTP failures on `/api/risk-score`. The
rule-based numbers come back as 200 with the fault attached in the advisory
`error` field.
        ",
        version = "1.0.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::routes::risk::risk_score,
        crate::routes::entities::list_entities,
        crate::routes::entities::get_entity,
        crate::routes::entities::create_entity,
        crate::routes::entities::update_entity,
        crate::routes::audit::list_audit_events,
        crate::routes::audit::create_audit_event,
        crate::server::health_check
    ),
    components(schemas(
        crate::types::HealthResponse,
        crate::types::ErrorResponse,
        syntria_common::OnboardingSubject,
        syntria_common::UploadedFile,
        syntria_common::RiskAssessment,
        syntria_common::RiskLevel,
        syntria_common::CompanyType,
        syntria_common::ComplianceStatus,
        syntria_common::EntityStatus,
        syntria_common::EntityId,
        syntria_common::AuditEventId,
        syntria_common::Entity,
        syntria_common::EntityDraft,
        syntria_common::AuditEvent,
        syntria_common::AuditEventDraft
    )),
    tags(
        (name = "risk", description = "Risk classification"),
        (name = "entities", description = "Entity records"),
        (name = "audit", description = "Audit trail"),
        (name = "health", description = "System health and status")
    )
)]
pub struct ApiDoc;
