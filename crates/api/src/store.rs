//! Injected repositories for entity and audit records.
//!
//! Handlers only see the traits; the in-memory implementations keep
//! insertion order and hold their locks for the duration of a single
//! operation. Nothing here persists past the process.

use std::sync::RwLock;
use syntria_common::{
    AuditEvent, AuditEventDraft, Entity, EntityDraft, EntityId, Result, ServerError,
};

/// Storage capability for onboarded entities.
pub trait EntityRepository: Send + Sync {
    fn get(&self, id: &EntityId) -> Result<Entity>;
    fn list(&self) -> Vec<Entity>;
    fn insert(&self, draft: EntityDraft) -> Entity;
    fn update(&self, id: &EntityId, draft: EntityDraft) -> Result<Entity>;
}

/// Append-only audit trail.
pub trait AuditLog: Send + Sync {
    fn list(&self) -> Vec<AuditEvent>;
    fn append(&self, draft: AuditEventDraft) -> AuditEvent;
}

#[derive(Default)]
pub struct InMemoryEntityRepository {
    entries: RwLock<Vec<Entity>>,
}

impl InMemoryEntityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityRepository for InMemoryEntityRepository {
    fn get(&self, id: &EntityId) -> Result<Entity> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .iter()
            .find(|entity| &entity.id == id)
            .cloned()
            .ok_or_else(|| ServerError::EntityNotFound(id.to_string()))
    }

    fn list(&self) -> Vec<Entity> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.clone()
    }

    fn insert(&self, draft: EntityDraft) -> Entity {
        let entity = Entity::from_draft(draft);
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.push(entity.clone());
        entity
    }

    fn update(&self, id: &EntityId, draft: EntityDraft) -> Result<Entity> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let entity = entries
            .iter_mut()
            .find(|entity| &entity.id == id)
            .ok_or_else(|| ServerError::EntityNotFound(id.to_string()))?;
        entity.apply_draft(draft);
        Ok(entity.clone())
    }
}

#[derive(Default)]
pub struct InMemoryAuditLog {
    events: RwLock<Vec<AuditEvent>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuditLog for InMemoryAuditLog {
    fn list(&self) -> Vec<AuditEvent> {
        let events = self.events.read().unwrap_or_else(|e| e.into_inner());
        events.clone()
    }

    fn append(&self, draft: AuditEventDraft) -> AuditEvent {
        let event = AuditEvent::from_draft(draft);
        let mut events = self.events.write().unwrap_or_else(|e| e.into_inner());
        events.push(event.clone());
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntria_common::{CompanyType, ComplianceStatus, EntityStatus, RiskLevel};

    fn draft(name: &str) -> EntityDraft {
        EntityDraft {
            name: name.to_string(),
            entity_type: CompanyType::Vendor,
            risk_level: RiskLevel::Low,
            compliance: ComplianceStatus::Partial,
            status: EntityStatus::Pending,
            owner: "compliance".to_string(),
        }
    }

    #[test]
    fn insert_then_get_and_list_in_order() {
        let repo = InMemoryEntityRepository::new();
        let a = repo.insert(draft("Acme"));
        let b = repo.insert(draft("Globex"));

        assert_eq!(repo.get(&a.id).unwrap().name, "Acme");
        let listed: Vec<String> = repo.list().into_iter().map(|e| e.name).collect();
        assert_eq!(listed, vec!["Acme", "Globex"]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn update_bumps_last_updated() {
        let repo = InMemoryEntityRepository::new();
        let entity = repo.insert(draft("Acme"));

        let mut changed = draft("Acme Corp");
        changed.status = EntityStatus::Active;
        let updated = repo.update(&entity.id, changed).unwrap();

        assert_eq!(updated.name, "Acme Corp");
        assert_eq!(updated.status, EntityStatus::Active);
        assert!(updated.last_updated >= entity.last_updated);
        assert_eq!(updated.created_at, entity.created_at);
    }

    #[test]
    fn missing_entity_is_not_found() {
        let repo = InMemoryEntityRepository::new();
        let id = EntityId::from_string("entity-missing".into());

        assert!(matches!(
            repo.get(&id),
            Err(ServerError::EntityNotFound(_))
        ));
        assert!(repo.update(&id, draft("x")).is_err());
    }

    #[test]
    fn audit_log_appends_in_order() {
        let log = InMemoryAuditLog::new();
        log.append(AuditEventDraft {
            action: "onboard".to_string(),
            ..Default::default()
        });
        log.append(AuditEventDraft {
            action: "review".to_string(),
            ..Default::default()
        });

        let actions: Vec<String> = log.list().into_iter().map(|e| e.action).collect();
        assert_eq!(actions, vec!["onboard", "review"]);
    }
}
