use std::sync::Arc;

use async_trait::async_trait;

use crate::audit_log::{
    domain::{
        model::{
            entities::audit_event::AuditEvent, enums::audit_log_domain_error::AuditLogDomainError,
            queries::list_audit_events_query::ListAuditEventsQuery,
        },
        services::audit_event_query_service::AuditEventQueryService,
    },
    infrastructure::persistence::repositories::audit_event_repository::AuditEventRepository,
};

pub struct AuditEventQueryServiceImpl {
    repository: Arc<dyn AuditEventRepository>,
}

impl AuditEventQueryServiceImpl {
    pub fn new(repository: Arc<dyn AuditEventRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AuditEventQueryService for AuditEventQueryServiceImpl {
    async fn handle_list(
        &self,
        _query: ListAuditEventsQuery,
    ) -> Result<Vec<AuditEvent>, AuditLogDomainError> {
        self.repository.list_all().await
    }
}
