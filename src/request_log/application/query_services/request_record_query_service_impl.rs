use std::sync::Arc;

use async_trait::async_trait;

use crate::request_log::{
    domain::{
        model::{
            entities::request_record::RequestRecord,
            enums::request_log_domain_error::RequestLogDomainError,
            queries::list_request_records_query::ListRequestRecordsQuery,
        },
        services::request_record_query_service::RequestRecordQueryService,
    },
    infrastructure::persistence::repositories::request_record_repository::RequestRecordRepository,
};

pub struct RequestRecordQueryServiceImpl {
    repository: Arc<dyn RequestRecordRepository>,
}

impl RequestRecordQueryServiceImpl {
    pub fn new(repository: Arc<dyn RequestRecordRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestRecordQueryService for RequestRecordQueryServiceImpl {
    async fn handle_list(
        &self,
        _query: ListRequestRecordsQuery,
    ) -> Result<Vec<RequestRecord>, RequestLogDomainError> {
        self.repository.list_all().await
    }
}
