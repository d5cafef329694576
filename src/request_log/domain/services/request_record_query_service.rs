use async_trait::async_trait;

use crate::request_log::domain::model::{
    entities::request_record::RequestRecord,
    enums::request_log_domain_error::RequestLogDomainError,
    queries::list_request_records_query::ListRequestRecordsQuery,
};

#[async_trait]
pub trait RequestRecordQueryService: Send + Sync {
    async fn handle_list(
        &self,
        query: ListRequestRecordsQuery,
    ) -> Result<Vec<RequestRecord>, RequestLogDomainError>;
}
