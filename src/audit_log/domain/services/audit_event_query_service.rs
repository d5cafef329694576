use async_trait::async_trait;

use crate::audit_log::domain::model::{
    entities::audit_event::AuditEvent, enums::audit_log_domain_error::AuditLogDomainError,
    queries::list_audit_events_query::ListAuditEventsQuery,
};

#[async_trait]
pub trait AuditEventQueryService: Send + Sync {
    async fn handle_list(
        &self,
        query: ListAuditEventsQuery,
    ) -> Result<Vec<AuditEvent>, AuditLogDomainError>;
}
