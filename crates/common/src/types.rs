use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for entities
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new() -> Self {
        Self(format!("entity-{}", Uuid::new_v4()))
    }

    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for audit events
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuditEventId(pub String);

impl AuditEventId {
    pub fn new() -> Self {
        Self(format!("audit-{}", Uuid::new_v4()))
    }
}

impl Default for AuditEventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuditEventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Categorical compliance-risk bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a 0-100 score into its band: >70 HIGH, >40 MEDIUM, else LOW.
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            RiskLevel::High
        } else if score > 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Representative score assigned when the level comes from the AI path.
    pub fn representative_score(self) -> u8 {
        match self {
            RiskLevel::High => 85,
            RiskLevel::Medium => 55,
            RiskLevel::Low => 25,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of counterparty being onboarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum CompanyType {
    Vendor,
    Client,
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanyType::Vendor => f.write_str("vendor"),
            CompanyType::Client => f.write_str("client"),
        }
    }
}

/// Document uploaded during onboarding, payload already base64-encoded by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub name: String,
    /// MIME type; absent means the provider is told application/pdf
    #[serde(default)]
    pub mime_type: Option<String>,
    pub base64: String,
}

/// Vendor or client entity being evaluated for risk during intake.
///
/// Every field is optional on the wire; missing flags read as false and
/// missing lists as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingSubject {
    pub company_name: String,
    pub company_type: Option<CompanyType>,
    pub country: String,
    pub ein: String,
    pub contact_email: String,
    pub has_controls: bool,
    #[serde(rename = "hasPII")]
    pub has_pii: bool,
    /// Document-checklist labels, not the documents themselves
    pub documents: Vec<String>,
    pub uploaded_files: Vec<UploadedFile>,
}

/// Outcome of a risk classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub score: u8,
    pub reasons: Vec<String>,
    /// Advisory only: set when the AI path failed and the rule-based
    /// fallback produced the numbers above
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Compliance review outcome for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ComplianceStatus {
    Pass,
    Partial,
    Fail,
}

/// Lifecycle state of an onboarded entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum EntityStatus {
    Active,
    Pending,
    Decommissioned,
}

/// Onboarded vendor or client record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: CompanyType,
    pub risk_level: RiskLevel,
    pub compliance: ComplianceStatus,
    pub status: EntityStatus,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Client-supplied entity fields; the server assigns id and timestamps
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EntityDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: CompanyType,
    #[serde(default = "default_risk_level")]
    pub risk_level: RiskLevel,
    #[serde(default = "default_compliance")]
    pub compliance: ComplianceStatus,
    #[serde(default = "default_entity_status")]
    pub status: EntityStatus,
    #[serde(default)]
    pub owner: String,
}

fn default_risk_level() -> RiskLevel {
    RiskLevel::Low
}

fn default_compliance() -> ComplianceStatus {
    ComplianceStatus::Partial
}

fn default_entity_status() -> EntityStatus {
    EntityStatus::Pending
}

impl Entity {
    /// Materialize a draft into a stored record
    pub fn from_draft(draft: EntityDraft) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            name: draft.name,
            entity_type: draft.entity_type,
            risk_level: draft.risk_level,
            compliance: draft.compliance,
            status: draft.status,
            owner: draft.owner,
            created_at: now,
            last_updated: now,
        }
    }

    /// Apply a draft over an existing record, bumping last_updated
    pub fn apply_draft(&mut self, draft: EntityDraft) {
        self.name = draft.name;
        self.entity_type = draft.entity_type;
        self.risk_level = draft.risk_level;
        self.compliance = draft.compliance;
        self.status = draft.status;
        self.owner = draft.owner;
        self.last_updated = Utc::now();
    }
}

/// Audit-trail record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    pub id: AuditEventId,
    pub timestamp: DateTime<Utc>,
    pub entity_id: Option<EntityId>,
    pub entity_name: String,
    pub action: String,
    pub user: String,
    pub details: String,
}

/// Client-supplied audit fields; the server assigns id and timestamp
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct AuditEventDraft {
    pub entity_id: Option<EntityId>,
    pub entity_name: Option<String>,
    pub action: String,
    pub user: String,
    pub details: String,
}

impl AuditEvent {
    pub fn from_draft(draft: AuditEventDraft) -> Self {
        let entity_name = draft
            .entity_name
            .or_else(|| draft.entity_id.as_ref().map(|id| id.to_string()))
            .unwrap_or_else(|| "Unknown".to_string());
        Self {
            id: AuditEventId::new(),
            timestamp: Utc::now(),
            entity_id: draft.entity_id,
            entity_name,
            action: draft.action,
            user: draft.user,
            details: draft.details,
        }
    }
}
