use crate::audit_log::domain::model::enums::audit_log_domain_error::AuditLogDomainError;

pub const MAX_AUDIT_ACTION_LENGTH: usize = 100;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditAction(String);

impl AuditAction {
    pub fn new(value: String) -> Result<Self, AuditLogDomainError> {
        if value.trim().is_empty() {
            return Err(AuditLogDomainError::MissingUserOrAction);
        }

        if value.chars().count() > MAX_AUDIT_ACTION_LENGTH {
            return Err(AuditLogDomainError::ActionTooLong {
                max: MAX_AUDIT_ACTION_LENGTH,
            });
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
