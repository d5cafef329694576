use thiserror::Error;

use crate::bootstrap::domain::model::enums::bootstrap_status::BootstrapStatus;

#[derive(Debug, Error)]
pub enum BootstrapDomainError {
    #[error("target database name is invalid; it must be 1..63 bytes without NUL characters")]
    InvalidDatabaseName,

    #[error("failed to connect to postgres: {0}")]
    ConnectionFailed(String),

    #[error("failed to create target database: {0}")]
    DatabaseCreationFailed(String),

    #[error("failed to inspect existing tables: {0}")]
    SchemaInspectionFailed(String),

    #[error("failed to create schema: {0}")]
    SchemaCreationFailed(String),

    #[error("failed to apply migrations: {0}")]
    MigrationFailed(String),

    #[error("invalid bootstrap transition from {from} to {to}")]
    InvalidStateTransition {
        from: BootstrapStatus,
        to: BootstrapStatus,
    },
}
