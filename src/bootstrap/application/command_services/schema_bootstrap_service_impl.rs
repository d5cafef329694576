use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::bootstrap::{
    domain::{
        model::{
            commands::ensure_ready_command::EnsureReadyCommand,
            entities::bootstrap_run::BootstrapRun,
            enums::{
                bootstrap_domain_error::BootstrapDomainError,
                schema_plan::{REQUIRED_TABLES, SchemaPlan},
            },
        },
        services::schema_bootstrap_service::SchemaBootstrapService,
    },
    infrastructure::persistence::repositories::{
        database_administration_repository::DatabaseAdministrationRepository,
        schema_repository::SchemaRepository,
    },
};

pub struct SchemaBootstrapServiceImpl {
    administration_repository: Arc<dyn DatabaseAdministrationRepository>,
    schema_repository: Arc<dyn SchemaRepository>,
}

impl SchemaBootstrapServiceImpl {
    pub fn new(
        administration_repository: Arc<dyn DatabaseAdministrationRepository>,
        schema_repository: Arc<dyn SchemaRepository>,
    ) -> Self {
        Self {
            administration_repository,
            schema_repository,
        }
    }

    async fn advance(&self, run: &mut BootstrapRun) -> Result<(), BootstrapDomainError> {
        let outcome = self
            .administration_repository
            .ensure_database(run.database_name())
            .await?;
        run.mark_database_ensured(outcome)?;
        tracing::info!(
            database = run.database_name().value(),
            outcome = outcome.as_str(),
            "bootstrap: database ensured"
        );

        self.schema_repository.verify_connection().await?;

        let existing_tables = self
            .schema_repository
            .list_existing_tables(&REQUIRED_TABLES)
            .await?;
        let plan = SchemaPlan::from_existing_tables(&existing_tables);
        if plan == SchemaPlan::FreshSchema {
            self.schema_repository.create_schema().await?;
        }
        run.mark_schema_ensured(plan)?;
        tracing::info!(plan = plan.as_str(), "bootstrap: schema ensured");

        let migrations_applied = self.schema_repository.apply_pending_migrations().await?;
        run.mark_migrations_applied(migrations_applied)?;
        tracing::info!(migrations_applied, "bootstrap: migrations applied");

        run.mark_ready()
    }
}

#[async_trait]
impl SchemaBootstrapService for SchemaBootstrapServiceImpl {
    async fn handle_ensure_ready(
        &self,
        command: EnsureReadyCommand,
    ) -> Result<BootstrapRun, BootstrapDomainError> {
        let mut run = BootstrapRun::new_unchecked(command.database_name().clone(), Utc::now());

        match self.advance(&mut run).await {
            Ok(()) => {
                tracing::info!(
                    database = run.database_name().value(),
                    elapsed_ms = (Utc::now() - run.started_at()).num_milliseconds(),
                    "bootstrap: ready"
                );
                Ok(run)
            }
            Err(error) => {
                let reached = run.status();
                if let Err(abort_error) = run.abort() {
                    tracing::warn!(error = %abort_error, "bootstrap: run already terminal");
                }
                tracing::error!(
                    database = run.database_name().value(),
                    reached = reached.as_str(),
                    error = %error,
                    "bootstrap: aborted"
                );
                Err(error)
            }
        }
    }
}
