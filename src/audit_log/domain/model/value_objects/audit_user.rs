use crate::audit_log::domain::model::enums::audit_log_domain_error::AuditLogDomainError;

pub const MAX_AUDIT_USER_LENGTH: usize = 50;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditUser(String);

impl AuditUser {
    pub fn new(value: String) -> Result<Self, AuditLogDomainError> {
        if value.trim().is_empty() {
            return Err(AuditLogDomainError::MissingUserOrAction);
        }

        if value.chars().count() > MAX_AUDIT_USER_LENGTH {
            return Err(AuditLogDomainError::UserTooLong {
                max: MAX_AUDIT_USER_LENGTH,
            });
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
