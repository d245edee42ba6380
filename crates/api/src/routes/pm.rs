//! Mocked PM-agent endpoints.
//!
//! These return templated payloads derived from the request so the demo
//! front end has something realistic to render. No model calls happen here.

use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::types::{
    AgentResponse, AgentTraceStep, IdealCustomerProfile, MessageData, PlanningData,
    PlanningRequest, ResearchData, ResearchRequest, ResearchTheme, SprintPlan, StrategyData,
    StrategyRequest, TestCase, UserStory,
};

fn trace_step(agent: &str, action: &str, input: serde_json::Value, output: &str) -> AgentTraceStep {
    AgentTraceStep {
        timestamp: Utc::now(),
        agent: agent.to_string(),
        action: action.to_string(),
        input,
        output: output.to_string(),
    }
}

pub async fn strategy(Json(req): Json<StrategyRequest>) -> Json<AgentResponse<StrategyData>> {
    let data = StrategyData {
        north_star: format!("Become the leading {} solution for {}", req.market, req.segment),
        icps: vec![IdealCustomerProfile {
            segment: req.segment.clone(),
            pain_points: vec!["Manual processes".to_string(), "Data silos".to_string()],
        }],
        success_metrics: vec![
            "User retention > 90%".to_string(),
            "Time to value < 7 days".to_string(),
            "NPS > 50".to_string(),
        ],
        constraints: req.constraints.clone(),
        prd: "# Product Brief\n\n## Vision\n\n...\n\n## Success Metrics\n\n...".to_string(),
    };

    Json(AgentResponse {
        success: true,
        data,
        trace: vec![trace_step(
            "strategy",
            "generate_brief",
            json!({ "market": req.market, "segment": req.segment, "goals": req.goals }),
            "Generated product brief",
        )],
    })
}

pub async fn research(Json(req): Json<ResearchRequest>) -> Json<AgentResponse<ResearchData>> {
    let data = ResearchData {
        themes: vec![
            ResearchTheme {
                name: "Automation requests".to_string(),
                count: 45,
                priority: "high".to_string(),
            },
            ResearchTheme {
                name: "Integration needs".to_string(),
                count: 32,
                priority: "medium".to_string(),
            },
            ResearchTheme {
                name: "Performance improvements".to_string(),
                count: 28,
                priority: "medium".to_string(),
            },
        ],
        insights: vec![
            "Users want to automate repetitive tasks".to_string(),
            "Integration with existing tools is critical".to_string(),
            "Performance is a key differentiator".to_string(),
        ],
        opportunities: vec![
            "Build no-code automation builder".to_string(),
            "Add Zapier integration".to_string(),
            "Optimize database queries".to_string(),
        ],
    };

    Json(AgentResponse {
        success: true,
        data,
        trace: vec![trace_step(
            "research",
            "cluster_feedback",
            json!({ "feedback": req.feedback }),
            "Clustered themes",
        )],
    })
}

pub async fn planning(Json(req): Json<PlanningRequest>) -> Json<AgentResponse<PlanningData>> {
    let stories = req
        .requirements
        .iter()
        .enumerate()
        .map(|(i, requirement)| UserStory {
            id: format!("US-{}", i + 1),
            title: requirement.clone(),
            description: format!("As a user, I want to {}", requirement.to_lowercase()),
            acceptance_criteria: vec![
                "Given valid input".to_string(),
                "When action is triggered".to_string(),
                "Then expected outcome occurs".to_string(),
            ],
            priority: match i {
                0 => "high",
                1 => "medium",
                _ => "low",
            }
            .to_string(),
            effort: "medium".to_string(),
        })
        .collect();

    let test_cases = req
        .requirements
        .iter()
        .enumerate()
        .map(|(i, requirement)| TestCase {
            id: format!("TC-{}", i + 1),
            scenario: format!("Test {}", requirement.to_lowercase()),
            steps: vec![
                "Step 1".to_string(),
                "Step 2".to_string(),
                "Step 3".to_string(),
            ],
            expected: "Expected result".to_string(),
        })
        .collect();

    let data = PlanningData {
        stories,
        sprint: SprintPlan {
            length: req.sprint_length.unwrap_or(2),
            capacity: 40,
            planned: req.requirements.iter().take(3).cloned().collect(),
        },
        test_cases,
    };

    Json(AgentResponse {
        success: true,
        data,
        trace: vec![trace_step(
            "planning",
            "generate_backlog",
            json!({ "requirements": req.requirements }),
            "Generated stories and sprint plan",
        )],
    })
}

pub async fn gtm() -> Json<AgentResponse<MessageData>> {
    Json(AgentResponse {
        success: true,
        data: MessageData {
            message: "GTM agent coming soon".to_string(),
        },
        trace: Vec::new(),
    })
}

pub async fn automation_calendar() -> Json<AgentResponse<MessageData>> {
    Json(AgentResponse {
        success: true,
        data: MessageData {
            message: "Calendar events created (mocked)".to_string(),
        },
        trace: Vec::new(),
    })
}

pub async fn automation_notion() -> Json<AgentResponse<MessageData>> {
    Json(AgentResponse {
        success: true,
        data: MessageData {
            message: "Synced to Notion (mocked)".to_string(),
        },
        trace: Vec::new(),
    })
}
