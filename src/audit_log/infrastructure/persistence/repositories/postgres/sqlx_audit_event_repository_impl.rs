use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::audit_log::{
    domain::model::{
        entities::audit_event::AuditEvent,
        enums::audit_log_domain_error::AuditLogDomainError,
        value_objects::{
            audit_action::AuditAction, audit_event_id::AuditEventId, audit_user::AuditUser,
        },
    },
    infrastructure::persistence::repositories::audit_event_repository::AuditEventRepository,
};

pub struct SqlxAuditEventRepositoryImpl {
    pool: PgPool,
}

impl SqlxAuditEventRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<AuditEvent, AuditLogDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let user_raw: String = row.try_get("audit_user").map_err(map_infra_error)?;
        let action_raw: String = row.try_get("audit_action").map_err(map_infra_error)?;
        let inserted_at: DateTime<Utc> = row.try_get("inserted_at").map_err(map_infra_error)?;

        Ok(AuditEvent::restore(
            AuditEventId::new(id),
            AuditUser::new(user_raw)?,
            AuditAction::new(action_raw)?,
            inserted_at,
        ))
    }
}

#[async_trait]
impl AuditEventRepository for SqlxAuditEventRepositoryImpl {
    async fn insert(
        &self,
        id: AuditEventId,
        user: &AuditUser,
        action: &AuditAction,
    ) -> Result<AuditEvent, AuditLogDomainError> {
        let statement = r#"
            INSERT INTO audit_events (id, audit_user, audit_action)
            VALUES ($1, $2, $3)
            RETURNING inserted_at
        "#;

        let inserted_at: DateTime<Utc> = sqlx::query_scalar(statement)
            .bind(id.value())
            .bind(user.value())
            .bind(action.value())
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(AuditEvent::restore(
            id,
            user.clone(),
            action.clone(),
            inserted_at,
        ))
    }

    async fn list_all(&self) -> Result<Vec<AuditEvent>, AuditLogDomainError> {
        let statement = r#"
            SELECT id, audit_user, audit_action, inserted_at
            FROM audit_events
            ORDER BY inserted_at, id
        "#;

        let rows = sqlx::query(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }
}

fn map_infra_error(error: sqlx::Error) -> AuditLogDomainError {
    AuditLogDomainError::InfrastructureError(error.to_string())
}
