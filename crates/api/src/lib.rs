//! # Syntria API Server
//!
//! REST backend for the Syntria compliance demo: vendor/client onboarding
//! with AI-assisted risk scoring, entity records and an audit trail.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │    REST Endpoints    │ <- /api/risk-score, /api/entities, /api/audit,
//! ├──────────────────────┤    /api/health, /api/pm/*
//! │   Risk Classifier    │ <- Gemini analysis with rule-based fallback
//! ├──────────────────────┤
//! │     Repositories     │ <- injected entity/audit stores (in-memory)
//! └──────────────────────┘
//! ```
//!
//! ## Endpoints
//!
//! - **POST** `/api/risk-score` - classify an onboarding subject. Always
//!   answers 200 with a usable assessment; provider faults degrade to the
//!   rule table and surface only as an advisory `error` field.
//! - **GET/POST** `/api/entities`, **GET/PUT** `/api/entities/:id` - CRUD
//!   over onboarded entity records.
//! - **GET/POST** `/api/audit` - append-only audit trail.
//! - **GET** `/api/health` - provider availability.
//! - **POST** `/api/pm/*` - mocked PM-agent endpoints returning templated
//!   payloads for the demo front end.
//!
//! ## Documentation access
//!
//! - **GET** `/api-doc/openapi.json` - raw OpenAPI specification
//! - Browse `/docs` - interactive Swagger UI
//!
//! ## Error handling
//!
//! Structured `ErrorResponse` JSON with HTTP status codes for API errors;
//! risk classification itself never produces an HTTP failure - the
//! "always decide" contract outranks AI-path success.

pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod store;
pub mod types;

pub use server::{app, ApiServer, AppState};
pub use types::*;
