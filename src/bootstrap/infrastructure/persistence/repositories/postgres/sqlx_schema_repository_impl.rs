use async_trait::async_trait;
use sqlx::{Executor, PgPool, migrate::Migrator};

use crate::bootstrap::{
    domain::model::enums::bootstrap_domain_error::BootstrapDomainError,
    infrastructure::persistence::repositories::schema_repository::SchemaRepository,
};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const SCHEMA_SQL: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/schema/schema.sql"));

// Serialises concurrent fresh-schema creation across processes.
const SCHEMA_LOCK_KEY: i64 = 0x6175_6469_745f_7363;

pub struct SqlxSchemaRepositoryImpl {
    pool: PgPool,
}

impl SqlxSchemaRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn applied_migration_count(&self) -> Result<usize, BootstrapDomainError> {
        let bookkeeping_exists: bool =
            sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations') IS NOT NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| BootstrapDomainError::MigrationFailed(e.to_string()))?;

        if !bookkeeping_exists {
            return Ok(0);
        }

        let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| BootstrapDomainError::MigrationFailed(e.to_string()))?;

        usize::try_from(applied).map_err(|_| {
            BootstrapDomainError::MigrationFailed(format!(
                "migration bookkeeping reported {applied} applied versions"
            ))
        })
    }
}

#[async_trait]
impl SchemaRepository for SqlxSchemaRepositoryImpl {
    async fn verify_connection(&self) -> Result<(), BootstrapDomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| BootstrapDomainError::ConnectionFailed(e.to_string()))?;

        Ok(())
    }

    async fn list_existing_tables(
        &self,
        required_tables: &[&str],
    ) -> Result<Vec<String>, BootstrapDomainError> {
        let statement = r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = current_schema()
              AND table_name::text = ANY($1)
        "#;

        let names: Vec<String> = required_tables.iter().map(|t| t.to_string()).collect();

        sqlx::query_scalar(statement)
            .bind(names)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| BootstrapDomainError::SchemaInspectionFailed(e.to_string()))
    }

    async fn create_schema(&self) -> Result<(), BootstrapDomainError> {
        let map_error = |e: sqlx::Error| BootstrapDomainError::SchemaCreationFailed(e.to_string());

        let mut transaction = self.pool.begin().await.map_err(map_error)?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SCHEMA_LOCK_KEY)
            .execute(&mut *transaction)
            .await
            .map_err(map_error)?;

        Executor::execute(&mut *transaction, SCHEMA_SQL)
            .await
            .map_err(map_error)?;

        transaction.commit().await.map_err(map_error)?;

        Ok(())
    }

    async fn apply_pending_migrations(&self) -> Result<usize, BootstrapDomainError> {
        let before = self.applied_migration_count().await?;

        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| BootstrapDomainError::MigrationFailed(e.to_string()))?;

        let after = self.applied_migration_count().await?;
        Ok(after.saturating_sub(before))
    }
}
