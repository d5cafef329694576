use async_trait::async_trait;

use crate::request_log::domain::model::{
    commands::record_completed_request_command::RecordCompletedRequestCommand,
    entities::request_record::RequestRecord,
    enums::request_log_domain_error::RequestLogDomainError,
    value_objects::request_record_id::RequestRecordId,
};

#[async_trait]
pub trait RequestRecordRepository: Send + Sync {
    async fn insert(
        &self,
        id: RequestRecordId,
        exchange: &RecordCompletedRequestCommand,
    ) -> Result<RequestRecord, RequestLogDomainError>;

    async fn list_all(&self) -> Result<Vec<RequestRecord>, RequestLogDomainError>;
}
