use std::{sync::Arc, time::Duration};

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    bootstrap::{
        application::command_services::schema_bootstrap_service_impl::SchemaBootstrapServiceImpl,
        domain::{
            model::{
                commands::ensure_ready_command::EnsureReadyCommand,
                enums::bootstrap_domain_error::BootstrapDomainError,
            },
            services::schema_bootstrap_service::SchemaBootstrapService,
        },
        infrastructure::persistence::repositories::postgres::{
            sqlx_database_administration_repository_impl::SqlxDatabaseAdministrationRepositoryImpl,
            sqlx_schema_repository_impl::SqlxSchemaRepositoryImpl,
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;

/// Ensures the target database and schema exist and are current, then hands
/// back the pool the rest of the service shares. Must succeed before the
/// listener is bound.
pub async fn ensure_ready(config: &AppConfig) -> Result<PgPool, BootstrapDomainError> {
    let command = EnsureReadyCommand::new(config.postgres_database.clone())?;

    let target_pool = PgPoolOptions::new()
        .max_connections(config.postgres_max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(config.target_connect_options());

    let service = SchemaBootstrapServiceImpl::new(
        Arc::new(SqlxDatabaseAdministrationRepositoryImpl::new(
            config.admin_connect_options(),
        )),
        Arc::new(SqlxSchemaRepositoryImpl::new(target_pool.clone())),
    );

    service.handle_ensure_ready(command).await?;

    Ok(target_pool)
}
