use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditLogDomainError {
    #[error("User and action are required")]
    MissingUserOrAction,

    #[error("user must be at most {max} characters")]
    UserTooLong { max: usize },

    #[error("action must be at most {max} characters")]
    ActionTooLong { max: usize },

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
