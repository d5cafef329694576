use std::sync::Arc;

use async_trait::async_trait;

use crate::request_log::{
    domain::{
        model::{
            commands::record_completed_request_command::RecordCompletedRequestCommand,
            entities::request_record::RequestRecord,
            enums::request_log_domain_error::RequestLogDomainError,
            value_objects::request_record_id::RequestRecordId,
        },
        services::request_record_command_service::RequestRecordCommandService,
    },
    infrastructure::persistence::repositories::request_record_repository::RequestRecordRepository,
};

pub struct RequestRecordCommandServiceImpl {
    repository: Arc<dyn RequestRecordRepository>,
}

impl RequestRecordCommandServiceImpl {
    pub fn new(repository: Arc<dyn RequestRecordRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestRecordCommandService for RequestRecordCommandServiceImpl {
    async fn handle_record(
        &self,
        command: RecordCompletedRequestCommand,
    ) -> Result<RequestRecord, RequestLogDomainError> {
        self.repository
            .insert(RequestRecordId::new_random(), &command)
            .await
    }
}
