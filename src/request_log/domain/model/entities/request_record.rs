use chrono::{DateTime, Utc};

use crate::request_log::domain::model::value_objects::{
    request_duration::RequestDuration, request_record_id::RequestRecordId,
};

#[derive(Clone, Debug)]
pub struct RequestRecord {
    id: RequestRecordId,
    method: String,
    path: String,
    body: Option<String>,
    headers: Option<String>,
    response_status: u16,
    response_body: Option<String>,
    duration: RequestDuration,
    timestamp: DateTime<Utc>,
}

impl RequestRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: RequestRecordId,
        method: String,
        path: String,
        body: Option<String>,
        headers: Option<String>,
        response_status: u16,
        response_body: Option<String>,
        duration: RequestDuration,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            method,
            path,
            body,
            headers,
            response_status,
            response_body,
            duration,
            timestamp,
        }
    }

    pub fn id(&self) -> RequestRecordId {
        self.id
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn headers(&self) -> Option<&str> {
        self.headers.as_deref()
    }

    pub fn response_status(&self) -> u16 {
        self.response_status
    }

    pub fn response_body(&self) -> Option<&str> {
        self.response_body.as_deref()
    }

    pub fn duration(&self) -> RequestDuration {
        self.duration
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
