use async_trait::async_trait;
use sqlx::{Connection, Executor, PgConnection, postgres::PgConnectOptions};

use crate::bootstrap::{
    domain::model::{
        enums::{
            bootstrap_domain_error::BootstrapDomainError,
            database_creation_outcome::DatabaseCreationOutcome,
        },
        value_objects::target_database_name::TargetDatabaseName,
    },
    infrastructure::persistence::repositories::database_administration_repository::DatabaseAdministrationRepository,
};

const DUPLICATE_DATABASE: &str = "42P04";
const UNIQUE_VIOLATION: &str = "23505";

/// Talks to the administrative database over a single connection. Each
/// statement runs on its own, so `CREATE DATABASE` is never inside a
/// transaction block.
pub struct SqlxDatabaseAdministrationRepositoryImpl {
    admin_options: PgConnectOptions,
}

impl SqlxDatabaseAdministrationRepositoryImpl {
    pub fn new(admin_options: PgConnectOptions) -> Self {
        Self { admin_options }
    }

    /// Simple-query protocol: no implicit transaction around the statement.
    async fn run_statement(
        connection: &mut PgConnection,
        statement: &str,
    ) -> Result<(), sqlx::Error> {
        Executor::execute(&mut *connection, statement).await?;
        Ok(())
    }

    async fn create_if_missing(
        connection: &mut PgConnection,
        database_name: &TargetDatabaseName,
    ) -> Result<DatabaseCreationOutcome, BootstrapDomainError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)")
                .bind(database_name.value())
                .fetch_one(&mut *connection)
                .await
                .map_err(|e| BootstrapDomainError::DatabaseCreationFailed(e.to_string()))?;

        if exists {
            return Ok(DatabaseCreationOutcome::AlreadyExisted);
        }

        let statement = format!("CREATE DATABASE {}", database_name.quoted_identifier());
        match Self::run_statement(connection, &statement).await {
            Ok(_) => Ok(DatabaseCreationOutcome::Created),
            Err(error) if is_already_exists(&error) => Ok(DatabaseCreationOutcome::AlreadyExisted),
            Err(error) => Err(BootstrapDomainError::DatabaseCreationFailed(
                error.to_string(),
            )),
        }
    }
}

#[async_trait]
impl DatabaseAdministrationRepository for SqlxDatabaseAdministrationRepositoryImpl {
    async fn ensure_database(
        &self,
        database_name: &TargetDatabaseName,
    ) -> Result<DatabaseCreationOutcome, BootstrapDomainError> {
        let mut connection = PgConnection::connect_with(&self.admin_options)
            .await
            .map_err(|e| BootstrapDomainError::ConnectionFailed(e.to_string()))?;

        let outcome = Self::create_if_missing(&mut connection, database_name).await;

        if let Err(error) = connection.close().await {
            tracing::warn!(error = %error, "bootstrap: failed to close admin connection");
        }

        outcome
    }
}

fn is_already_exists(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .and_then(|database_error| database_error.code())
        .is_some_and(|code| code == DUPLICATE_DATABASE || code == UNIQUE_VIOLATION)
}
