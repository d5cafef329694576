use std::fmt;

use chrono::{DateTime, Utc};

use crate::audit_log::domain::model::value_objects::{
    audit_action::AuditAction, audit_event_id::AuditEventId, audit_user::AuditUser,
};

/// A caller-reported "user performed action" fact. Never updated once stored.
#[derive(Clone, Debug)]
pub struct AuditEvent {
    id: AuditEventId,
    user: AuditUser,
    action: AuditAction,
    inserted_at: DateTime<Utc>,
}

impl AuditEvent {
    pub fn restore(
        id: AuditEventId,
        user: AuditUser,
        action: AuditAction,
        inserted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user,
            action,
            inserted_at,
        }
    }

    pub fn id(&self) -> AuditEventId {
        self.id
    }

    pub fn user(&self) -> &AuditUser {
        &self.user
    }

    pub fn action(&self) -> &AuditAction {
        &self.action
    }

    pub fn inserted_at(&self) -> DateTime<Utc> {
        self.inserted_at
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AuditEvent({:?}, {:?})",
            self.user.value(),
            self.action.value()
        )
    }
}
