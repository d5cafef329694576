use chrono::{DateTime, Utc};

use crate::bootstrap::domain::model::{
    enums::{
        bootstrap_domain_error::BootstrapDomainError, bootstrap_status::BootstrapStatus,
        database_creation_outcome::DatabaseCreationOutcome, schema_plan::SchemaPlan,
    },
    value_objects::target_database_name::TargetDatabaseName,
};

#[derive(Clone, Debug)]
pub struct BootstrapRun {
    database_name: TargetDatabaseName,
    status: BootstrapStatus,
    database_outcome: Option<DatabaseCreationOutcome>,
    schema_plan: Option<SchemaPlan>,
    migrations_applied: usize,
    started_at: DateTime<Utc>,
}

impl BootstrapRun {
    pub fn new_unchecked(database_name: TargetDatabaseName, started_at: DateTime<Utc>) -> Self {
        Self {
            database_name,
            status: BootstrapStatus::Unchecked,
            database_outcome: None,
            schema_plan: None,
            migrations_applied: 0,
            started_at,
        }
    }

    pub fn mark_database_ensured(
        &mut self,
        outcome: DatabaseCreationOutcome,
    ) -> Result<(), BootstrapDomainError> {
        self.transition(BootstrapStatus::Unchecked, BootstrapStatus::DatabaseEnsured)?;
        self.database_outcome = Some(outcome);
        Ok(())
    }

    pub fn mark_schema_ensured(&mut self, plan: SchemaPlan) -> Result<(), BootstrapDomainError> {
        self.transition(BootstrapStatus::DatabaseEnsured, BootstrapStatus::SchemaEnsured)?;
        self.schema_plan = Some(plan);
        Ok(())
    }

    pub fn mark_migrations_applied(
        &mut self,
        migrations_applied: usize,
    ) -> Result<(), BootstrapDomainError> {
        self.transition(
            BootstrapStatus::SchemaEnsured,
            BootstrapStatus::MigrationsApplied,
        )?;
        self.migrations_applied = migrations_applied;
        Ok(())
    }

    pub fn mark_ready(&mut self) -> Result<(), BootstrapDomainError> {
        self.transition(BootstrapStatus::MigrationsApplied, BootstrapStatus::Ready)
    }

    pub fn abort(&mut self) -> Result<(), BootstrapDomainError> {
        if self.status.is_terminal() {
            return Err(BootstrapDomainError::InvalidStateTransition {
                from: self.status,
                to: BootstrapStatus::Aborted,
            });
        }
        self.status = BootstrapStatus::Aborted;
        Ok(())
    }

    fn transition(
        &mut self,
        expected: BootstrapStatus,
        next: BootstrapStatus,
    ) -> Result<(), BootstrapDomainError> {
        if self.status != expected {
            return Err(BootstrapDomainError::InvalidStateTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    pub fn database_name(&self) -> &TargetDatabaseName {
        &self.database_name
    }

    pub fn status(&self) -> BootstrapStatus {
        self.status
    }

    pub fn database_outcome(&self) -> Option<DatabaseCreationOutcome> {
        self.database_outcome
    }

    pub fn schema_plan(&self) -> Option<SchemaPlan> {
        self.schema_plan
    }

    pub fn migrations_applied(&self) -> usize {
        self.migrations_applied
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
