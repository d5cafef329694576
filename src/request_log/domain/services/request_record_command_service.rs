use async_trait::async_trait;

use crate::request_log::domain::model::{
    commands::record_completed_request_command::RecordCompletedRequestCommand,
    entities::request_record::RequestRecord,
    enums::request_log_domain_error::RequestLogDomainError,
};

#[async_trait]
pub trait RequestRecordCommandService: Send + Sync {
    async fn handle_record(
        &self,
        command: RecordCompletedRequestCommand,
    ) -> Result<RequestRecord, RequestLogDomainError>;
}
