use async_trait::async_trait;

use crate::audit_log::domain::model::{
    commands::record_audit_event_command::RecordAuditEventCommand,
    entities::audit_event::AuditEvent, enums::audit_log_domain_error::AuditLogDomainError,
};

#[async_trait]
pub trait AuditEventCommandService: Send + Sync {
    async fn handle_record(
        &self,
        command: RecordAuditEventCommand,
    ) -> Result<AuditEvent, AuditLogDomainError>;
}
