//! Router assembly and server lifecycle.

use anyhow::Context;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use syntria_common::SystemConfig;
use syntria_risk::RiskClassifier;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::logging::{get_tracing_layer, logging_middleware};
use crate::routes;
use crate::store::{AuditLog, EntityRepository, InMemoryAuditLog, InMemoryEntityRepository};
use crate::types::HealthResponse;

/// Shared handler state: configuration, the classifier, and the injected
/// repositories.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SystemConfig>,
    pub classifier: Arc<RiskClassifier>,
    pub entities: Arc<dyn EntityRepository>,
    pub audit: Arc<dyn AuditLog>,
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Server status and AI provider availability", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let has_key = state.classifier.has_model();
    Json(HealthResponse {
        ok: true,
        provider: if has_key { "gemini" } else { "none" }.to_string(),
        has_key,
    })
}

/// Build the full application router over the given state.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health_check))
        .route("/risk-score", post(routes::risk::risk_score))
        .route(
            "/entities",
            get(routes::entities::list_entities).post(routes::entities::create_entity),
        )
        .route(
            "/entities/:id",
            get(routes::entities::get_entity).put(routes::entities::update_entity),
        )
        .route(
            "/audit",
            get(routes::audit::list_audit_events).post(routes::audit::create_audit_event),
        )
        .route("/pm/strategy", post(routes::pm::strategy))
        .route("/pm/research", post(routes::pm::research))
        .route("/pm/planning", post(routes::pm::planning))
        .route("/pm/gtm", post(routes::pm::gtm))
        .route("/pm/automation/calendar", post(routes::pm::automation_calendar))
        .route("/pm/automation/notion", post(routes::pm::automation_notion));

    Router::new()
        .nest("/api", api)
        .merge(
            SwaggerUi::new("/docs")
                .url("/api-doc/openapi.json", crate::openapi::ApiDoc::openapi()),
        )
        .layer(axum::middleware::from_fn(logging_middleware))
        .layer(get_tracing_layer())
        // The front end is served separately; mirror its permissive CORS
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    pub fn new(config: SystemConfig) -> Self {
        let classifier = Arc::new(RiskClassifier::from_config(&config.risk));
        let state = AppState {
            config: Arc::new(config),
            classifier,
            entities: Arc::new(InMemoryEntityRepository::new()),
            audit: Arc::new(InMemoryAuditLog::new()),
        };
        Self { state }
    }

    pub fn router(&self) -> Router {
        app(self.state.clone())
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.state.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("API server running on http://{addr}");
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
