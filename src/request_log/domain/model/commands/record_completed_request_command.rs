use crate::request_log::domain::model::{
    enums::request_log_domain_error::RequestLogDomainError,
    value_objects::request_duration::RequestDuration,
};

pub const MAX_METHOD_LENGTH: usize = 10;
pub const MAX_PATH_LENGTH: usize = 255;

/// Describes one finished HTTP exchange. Over-long method and path values are
/// truncated to the column widths instead of rejected.
#[derive(Clone, Debug)]
pub struct RecordCompletedRequestCommand {
    method: String,
    path: String,
    body: Option<String>,
    headers: Option<String>,
    response_status: u16,
    response_body: Option<String>,
    duration: RequestDuration,
}

impl RecordCompletedRequestCommand {
    pub fn new(
        method: String,
        path: String,
        body: Option<String>,
        headers: Option<String>,
        response_status: u16,
        response_body: Option<String>,
        duration_seconds: f64,
    ) -> Result<Self, RequestLogDomainError> {
        Ok(Self {
            method: truncate_chars(method, MAX_METHOD_LENGTH),
            path: truncate_chars(path, MAX_PATH_LENGTH),
            body: body.filter(|value| !value.is_empty()),
            headers: headers.filter(|value| !value.is_empty()),
            response_status,
            response_body: response_body.filter(|value| !value.is_empty()),
            duration: RequestDuration::from_seconds(duration_seconds)?,
        })
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
}

fn truncate_chars(value: String, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((byte_index, _)) => value[..byte_index].to_string(),
        None => value,
    }
}
