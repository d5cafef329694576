use std::sync::Arc;

use async_trait::async_trait;

use crate::audit_log::{
    domain::{
        model::{
            commands::record_audit_event_command::RecordAuditEventCommand,
            entities::audit_event::AuditEvent,
            enums::audit_log_domain_error::AuditLogDomainError,
            value_objects::audit_event_id::AuditEventId,
        },
        services::audit_event_command_service::AuditEventCommandService,
    },
    infrastructure::persistence::repositories::audit_event_repository::AuditEventRepository,
};

pub struct AuditEventCommandServiceImpl {
    repository: Arc<dyn AuditEventRepository>,
}

impl AuditEventCommandServiceImpl {
    pub fn new(repository: Arc<dyn AuditEventRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AuditEventCommandService for AuditEventCommandServiceImpl {
    async fn handle_record(
        &self,
        command: RecordAuditEventCommand,
    ) -> Result<AuditEvent, AuditLogDomainError> {
        let event = self
            .repository
            .insert(AuditEventId::new_random(), command.user(), command.action())
            .await?;

        tracing::debug!(audit_event_id = %event.id().value(), "audit event recorded");

        Ok(event)
    }
}
