use async_trait::async_trait;

use crate::bootstrap::domain::model::{
    enums::{
        bootstrap_domain_error::BootstrapDomainError,
        database_creation_outcome::DatabaseCreationOutcome,
    },
    value_objects::target_database_name::TargetDatabaseName,
};

#[async_trait]
pub trait DatabaseAdministrationRepository: Send + Sync {
    /// Creates the database unless it exists. A concurrent creator winning the
    /// race yields `AlreadyExisted`, never an error.
    async fn ensure_database(
        &self,
        database_name: &TargetDatabaseName,
    ) -> Result<DatabaseCreationOutcome, BootstrapDomainError>;
}
