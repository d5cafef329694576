use crate::bootstrap::domain::model::{
    enums::bootstrap_domain_error::BootstrapDomainError,
    value_objects::target_database_name::TargetDatabaseName,
};

#[derive(Clone, Debug)]
pub struct EnsureReadyCommand {
    database_name: TargetDatabaseName,
}

impl EnsureReadyCommand {
    pub fn new(database_name: String) -> Result<Self, BootstrapDomainError> {
        Ok(Self {
            database_name: TargetDatabaseName::new(database_name)?,
        })
    }

    pub fn database_name(&self) -> &TargetDatabaseName {
        &self.database_name
    }
}
