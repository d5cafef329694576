use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::audit_log::domain::model::entities::audit_event::AuditEvent;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AuditEventResource {
    pub id: String,
    pub user: String,
    pub action: String,
    pub inserted_at: String,
}

impl From<AuditEvent> for AuditEventResource {
    fn from(event: AuditEvent) -> Self {
        Self {
            id: event.id().value().to_string(),
            user: event.user().value().to_string(),
            action: event.action().value().to_string(),
            inserted_at: event.inserted_at().to_rfc3339(),
        }
    }
}
