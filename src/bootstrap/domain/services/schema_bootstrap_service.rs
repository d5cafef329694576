use async_trait::async_trait;

use crate::bootstrap::domain::model::{
    commands::ensure_ready_command::EnsureReadyCommand, entities::bootstrap_run::BootstrapRun,
    enums::bootstrap_domain_error::BootstrapDomainError,
};

#[async_trait]
pub trait SchemaBootstrapService: Send + Sync {
    /// Drives the run to `Ready`, or returns the first fatal error.
    async fn handle_ensure_ready(
        &self,
        command: EnsureReadyCommand,
    ) -> Result<BootstrapRun, BootstrapDomainError>;
}
