use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::request_log::{
    domain::model::{
        commands::record_completed_request_command::RecordCompletedRequestCommand,
        entities::request_record::RequestRecord,
        enums::request_log_domain_error::RequestLogDomainError,
        value_objects::{request_duration::RequestDuration, request_record_id::RequestRecordId},
    },
    infrastructure::persistence::repositories::request_record_repository::RequestRecordRepository,
};

pub struct SqlxRequestRecordRepositoryImpl {
    pool: PgPool,
}

impl SqlxRequestRecordRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<RequestRecord, RequestLogDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let method: String = row.try_get("method").map_err(map_infra_error)?;
        let path: String = row.try_get("path").map_err(map_infra_error)?;
        let body: Option<String> = row.try_get("body").map_err(map_infra_error)?;
        let headers: Option<String> = row.try_get("headers").map_err(map_infra_error)?;
        let response_status: i32 = row.try_get("response_status").map_err(map_infra_error)?;
        let response_body: Option<String> =
            row.try_get("response_body").map_err(map_infra_error)?;
        let duration: f64 = row.try_get("duration").map_err(map_infra_error)?;
        let timestamp: DateTime<Utc> = row.try_get("timestamp").map_err(map_infra_error)?;

        let response_status = u16::try_from(response_status).map_err(|_| {
            RequestLogDomainError::InfrastructureError("unknown response status stored".to_string())
        })?;

        Ok(RequestRecord::restore(
            RequestRecordId::new(id),
            method,
            path,
            body,
            headers,
            response_status,
            response_body,
            RequestDuration::from_seconds(duration)?,
            timestamp,
        ))
    }
}

#[async_trait]
impl RequestRecordRepository for SqlxRequestRecordRepositoryImpl {
    async fn insert(
        &self,
        id: RequestRecordId,
        exchange: &RecordCompletedRequestCommand,
    ) -> Result<RequestRecord, RequestLogDomainError> {
        let statement = r#"
            INSERT INTO request_records (
                id,
                method,
                path,
                body,
                headers,
                response_status,
                response_body,
                duration
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING "timestamp"
        "#;

        let timestamp: DateTime<Utc> = sqlx::query_scalar(statement)
            .bind(id.value())
            .bind(exchange.method())
            .bind(exchange.path())
            .bind(exchange.body())
            .bind(exchange.headers())
            .bind(i32::from(exchange.response_status()))
            .bind(exchange.response_body())
            .bind(exchange.duration().seconds())
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(RequestRecord::restore(
            id,
            exchange.method().to_string(),
            exchange.path().to_string(),
            exchange.body().map(str::to_string),
            exchange.headers().map(str::to_string),
            exchange.response_status(),
            exchange.response_body().map(str::to_string),
            exchange.duration(),
            timestamp,
        ))
    }

    async fn list_all(&self) -> Result<Vec<RequestRecord>, RequestLogDomainError> {
        let statement = r#"
            SELECT id, method, path, body, headers, response_status, response_body, duration, "timestamp"
            FROM request_records
            ORDER BY "timestamp", id
        "#;

        let rows = sqlx::query(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }
}

fn map_infra_error(error: sqlx::Error) -> RequestLogDomainError {
    RequestLogDomainError::InfrastructureError(error.to_string())
}
