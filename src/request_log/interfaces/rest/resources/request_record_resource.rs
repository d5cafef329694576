use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::request_log::domain::model::entities::request_record::RequestRecord;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RequestRecordResource {
    pub id: String,
    pub method: String,
    pub path: String,
    pub body: Option<String>,
    pub headers: Option<String>,
    pub response_status: u16,
    pub response_body: Option<String>,
    pub duration: f64,
    pub timestamp: String,
}

impl From<RequestRecord> for RequestRecordResource {
    fn from(record: RequestRecord) -> Self {
        Self {
            id: record.id().value().to_string(),
            method: record.method().to_string(),
            path: record.path().to_string(),
            body: record.body().map(str::to_string),
            headers: record.headers().map(str::to_string),
            response_status: record.response_status(),
            response_body: record.response_body().map(str::to_string),
            duration: record.duration().seconds(),
            timestamp: record.timestamp().to_rfc3339(),
        }
    }
}
