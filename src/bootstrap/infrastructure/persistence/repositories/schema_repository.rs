use async_trait::async_trait;

use crate::bootstrap::domain::model::enums::bootstrap_domain_error::BootstrapDomainError;

#[async_trait]
pub trait SchemaRepository: Send + Sync {
    async fn verify_connection(&self) -> Result<(), BootstrapDomainError>;

    /// Returns the subset of `required_tables` present in the target schema.
    async fn list_existing_tables(
        &self,
        required_tables: &[&str],
    ) -> Result<Vec<String>, BootstrapDomainError>;

    async fn create_schema(&self) -> Result<(), BootstrapDomainError>;

    /// Applies every migration not yet recorded and returns how many ran.
    async fn apply_pending_migrations(&self) -> Result<usize, BootstrapDomainError>;
}
