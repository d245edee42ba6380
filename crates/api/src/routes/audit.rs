//! Audit-trail routes.

use axum::{extract::State, Json};
use syntria_common::{AuditEvent, AuditEventDraft};
use tracing::info;

use crate::server::AppState;

/// List all audit events
#[utoipa::path(
    get,
    path = "/api/audit",
    tag = "audit",
    responses(
        (status = 200, description = "All audit events in chronological order", body = [AuditEvent])
    )
)]
pub async fn list_audit_events(State(state): State<AppState>) -> Json<Vec<AuditEvent>> {
    Json(state.audit.list())
}

/// Append an audit event
///
/// The server assigns the id and timestamp; a missing entity name falls
/// back to the entity id, then to "Unknown".
#[utoipa::path(
    post,
    path = "/api/audit",
    tag = "audit",
    request_body = AuditEventDraft,
    responses(
        (status = 200, description = "The stored audit event", body = AuditEvent)
    )
)]
pub async fn create_audit_event(
    State(state): State<AppState>,
    Json(draft): Json<AuditEventDraft>,
) -> Json<AuditEvent> {
    let event = state.audit.append(draft);
    info!(event_id = %event.id, action = %event.action, "Audit event recorded");
    Json(event)
}
