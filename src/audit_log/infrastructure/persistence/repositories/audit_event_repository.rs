use async_trait::async_trait;

use crate::audit_log::domain::model::{
    entities::audit_event::AuditEvent,
    enums::audit_log_domain_error::AuditLogDomainError,
    value_objects::{
        audit_action::AuditAction, audit_event_id::AuditEventId, audit_user::AuditUser,
    },
};

#[async_trait]
pub trait AuditEventRepository: Send + Sync {
    /// Appends one event. The returned entity carries the store-assigned
    /// `inserted_at`.
    async fn insert(
        &self,
        id: AuditEventId,
        user: &AuditUser,
        action: &AuditAction,
    ) -> Result<AuditEvent, AuditLogDomainError>;

    async fn list_all(&self) -> Result<Vec<AuditEvent>, AuditLogDomainError>;
}
