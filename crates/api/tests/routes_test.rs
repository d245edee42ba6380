use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use std::sync::Arc;
use syntria_api::server::{app, AppState};
use syntria_api::store::{InMemoryAuditLog, InMemoryEntityRepository};
use syntria_common::SystemConfig;
use syntria_risk::gemini::{GenerativeModel, Part};
use syntria_risk::RiskClassifier;
use tower::ServiceExt;

struct FailingModel;

#[async_trait]
impl GenerativeModel for FailingModel {
    async fn generate(&self, _parts: Vec<Part>) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("simulated network error"))
    }
}

fn test_state(classifier: RiskClassifier) -> AppState {
    AppState {
        config: Arc::new(SystemConfig::default()),
        classifier: Arc::new(classifier),
        entities: Arc::new(InMemoryEntityRepository::new()),
        audit: Arc::new(InMemoryAuditLog::new()),
    }
}

fn test_app() -> Router {
    app(test_state(RiskClassifier::rule_based(5)))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn risk_score_uses_rule_table_without_provider() {
    let response = test_app()
        .oneshot(post_json(
            "/api/risk-score",
            r#"{"companyName": "Acme", "hasPII": true, "hasControls": false, "country": "Germany"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["riskLevel"], "HIGH");
    assert_eq!(body["score"], 90);
    assert_eq!(body["reasons"][0], "Rule-based fallback");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn risk_score_accepts_empty_subject() {
    // All defaults: no PII (+0), no controls (+25), non-USA country (+15)
    let response = test_app()
        .oneshot(post_json("/api/risk-score", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["score"], 60);
    assert_eq!(body["riskLevel"], "MEDIUM");
}

#[tokio::test]
async fn risk_score_rejects_malformed_body() {
    let response = test_app()
        .oneshot(post_json("/api/risk-score", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("Invalid JSON"));
    assert_eq!(body["code"], "JSON_PARSE_ERROR");
}

#[tokio::test]
async fn risk_score_degrades_on_provider_failure() {
    let classifier = RiskClassifier::with_model(Arc::new(FailingModel), 5);
    let response = app(test_state(classifier))
        .oneshot(post_json(
            "/api/risk-score",
            r#"{"hasPII": true, "hasControls": false, "country": "Germany"}"#,
        ))
        .await
        .unwrap();

    // Degrade-not-fail: still 200 with the rule-based numbers
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["riskLevel"], "HIGH");
    assert_eq!(body["score"], 90);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("simulated network error"));
}

#[tokio::test]
async fn health_reports_provider_absent() {
    let response = test_app().oneshot(get("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["provider"], "none");
    assert_eq!(body["hasKey"], false);
}

#[tokio::test]
async fn entity_crud_round_trip() {
    let app = test_app();

    let created = app
        .clone()
        .oneshot(post_json(
            "/api/entities",
            r#"{"name": "Acme", "type": "vendor", "riskLevel": "MEDIUM", "owner": "compliance"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::OK);
    let created = json_body(created).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("entity-"));
    assert_eq!(created["riskLevel"], "MEDIUM");

    let listed = app.clone().oneshot(get("/api/entities")).await.unwrap();
    let listed = json_body(listed).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let fetched = app
        .clone()
        .oneshot(get(&format!("/api/entities/{id}")))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);

    let updated = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/entities/{id}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name": "Acme Corp", "type": "vendor", "status": "Active"}"#.to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = json_body(updated).await;
    assert_eq!(updated["name"], "Acme Corp");
    assert_eq!(updated["status"], "Active");
}

#[tokio::test]
async fn missing_entity_is_404() {
    let response = test_app()
        .oneshot(get("/api/entities/entity-missing"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["code"], "ENTITY_NOT_FOUND");
}

#[tokio::test]
async fn audit_trail_appends_and_lists() {
    let app = test_app();

    let created = app
        .clone()
        .oneshot(post_json(
            "/api/audit",
            r#"{"action": "onboard", "user": "alice", "details": "started intake"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::OK);
    let created = json_body(created).await;
    assert!(created["id"].as_str().unwrap().starts_with("audit-"));
    assert_eq!(created["entityName"], "Unknown");

    let listed = app.clone().oneshot(get("/api/audit")).await.unwrap();
    let listed = json_body(listed).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["action"], "onboard");
}

#[tokio::test]
async fn pm_strategy_returns_templated_brief() {
    let response = test_app()
        .oneshot(post_json(
            "/api/pm/strategy",
            r#"{"market": "compliance", "segment": "mid-market", "goals": [], "constraints": ["SOC2"]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"]["northStar"],
        "Become the leading compliance solution for mid-market"
    );
    assert_eq!(body["trace"][0]["agent"], "strategy");
}
