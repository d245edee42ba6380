//! Type definitions for the Syntria API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error response
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Optional error code
    pub code: Option<String>,

    /// Timestamp of error
    pub timestamp: DateTime<Utc>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Whether the server is up
    pub ok: bool,

    /// Configured AI provider, "gemini" or "none"
    pub provider: String,

    /// Whether an API key is configured
    pub has_key: bool,
}

/// Envelope shared by the mocked PM-agent endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<AgentTraceStep>,
}

/// One step of an agent's (mocked) reasoning trace
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentTraceStep {
    pub timestamp: DateTime<Utc>,
    pub agent: String,
    pub action: String,
    pub input: serde_json::Value,
    pub output: String,
}

#[derive(Debug, Deserialize)]
pub struct StrategyRequest {
    pub market: String,
    pub segment: String,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyData {
    pub north_star: String,
    pub icps: Vec<IdealCustomerProfile>,
    pub success_metrics: Vec<String>,
    pub constraints: Vec<String>,
    pub prd: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealCustomerProfile {
    pub segment: String,
    pub pain_points: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub competitors: Vec<String>,
    #[serde(default)]
    pub trends: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResearchData {
    pub themes: Vec<ResearchTheme>,
    pub insights: Vec<String>,
    pub opportunities: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResearchTheme {
    pub name: String,
    pub count: u32,
    pub priority: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningRequest {
    pub requirements: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
    pub sprint_length: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningData {
    pub stories: Vec<UserStory>,
    pub sprint: SprintPlan,
    pub test_cases: Vec<TestCase>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStory {
    pub id: String,
    pub title: String,
    pub description: String,
    pub acceptance_criteria: Vec<String>,
    pub priority: String,
    pub effort: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SprintPlan {
    pub length: u32,
    pub capacity: u32,
    pub planned: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub scenario: String,
    pub steps: Vec<String>,
    pub expected: String,
}

/// Placeholder payload for endpoints that only acknowledge
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageData {
    pub message: String,
}
