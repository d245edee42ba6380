//! Entity CRUD routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use syntria_common::{Entity, EntityDraft, EntityId, ServerError};
use tracing::info;

use crate::server::AppState;
use crate::types::ErrorResponse;

fn storage_error(err: ServerError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match &err {
        ServerError::EntityNotFound(_) => (StatusCode::NOT_FOUND, "ENTITY_NOT_FOUND"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: Some(code.to_string()),
            timestamp: Utc::now(),
        }),
    )
}

/// List all entities
#[utoipa::path(
    get,
    path = "/api/entities",
    tag = "entities",
    responses(
        (status = 200, description = "All entity records in insertion order", body = [Entity])
    )
)]
pub async fn list_entities(State(state): State<AppState>) -> Json<Vec<Entity>> {
    Json(state.entities.list())
}

/// Fetch one entity by id
#[utoipa::path(
    get,
    path = "/api/entities/{id}",
    tag = "entities",
    params(("id" = String, Path, description = "Entity identifier")),
    responses(
        (status = 200, description = "The entity record", body = Entity),
        (status = 404, description = "No entity with that id", body = ErrorResponse)
    )
)]
pub async fn get_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Entity>, (StatusCode, Json<ErrorResponse>)> {
    let id = EntityId::from_string(id);
    state.entities.get(&id).map(Json).map_err(storage_error)
}

/// Create an entity
///
/// The server assigns the id and both timestamps.
#[utoipa::path(
    post,
    path = "/api/entities",
    tag = "entities",
    request_body = EntityDraft,
    responses(
        (status = 200, description = "The stored entity record", body = Entity)
    )
)]
pub async fn create_entity(
    State(state): State<AppState>,
    Json(draft): Json<EntityDraft>,
) -> Json<Entity> {
    let entity = state.entities.insert(draft);
    info!(entity_id = %entity.id, name = %entity.name, "Entity created");
    Json(entity)
}

/// Update an entity
#[utoipa::path(
    put,
    path = "/api/entities/{id}",
    tag = "entities",
    params(("id" = String, Path, description = "Entity identifier")),
    request_body = EntityDraft,
    responses(
        (status = 200, description = "The updated entity record", body = Entity),
        (status = 404, description = "No entity with that id", body = ErrorResponse)
    )
)]
pub async fn update_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<EntityDraft>,
) -> Result<Json<Entity>, (StatusCode, Json<ErrorResponse>)> {
    let id = EntityId::from_string(id);
    let entity = state
        .entities
        .update(&id, draft)
        .map_err(storage_error)?;
    info!(entity_id = %entity.id, "Entity updated");
    Ok(Json(entity))
}
