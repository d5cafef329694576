use crate::audit_log::domain::model::{
    enums::audit_log_domain_error::AuditLogDomainError,
    value_objects::{audit_action::AuditAction, audit_user::AuditUser},
};

#[derive(Clone, Debug)]
pub struct RecordAuditEventCommand {
    user: AuditUser,
    action: AuditAction,
}

impl RecordAuditEventCommand {
    /// Both fields are checked for presence before either is checked for length.
    pub fn new(user: Option<String>, action: Option<String>) -> Result<Self, AuditLogDomainError> {
        Self::require_present(user.as_deref(), action.as_deref())?;
        let (Some(user), Some(action)) = (user, action) else {
            return Err(AuditLogDomainError::MissingUserOrAction);
        };

        Ok(Self {
            user: AuditUser::new(user)?,
            action: AuditAction::new(action)?,
        })
    }

    /// Fails unless both values are present and not blank.
    pub fn require_present(
        user: Option<&str>,
        action: Option<&str>,
    ) -> Result<(), AuditLogDomainError> {
        let is_blank = |value: Option<&str>| value.is_none_or(|value| value.trim().is_empty());

        if is_blank(user) || is_blank(action) {
            return Err(AuditLogDomainError::MissingUserOrAction);
        }

        Ok(())
    }

    pub fn user(&self) -> &AuditUser {
        &self.user
    }

    pub fn action(&self) -> &AuditAction {
        &self.action
    }
}
