use crate::request_log::domain::model::enums::request_log_domain_error::RequestLogDomainError;

/// Wall-clock seconds between request receipt and response completion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RequestDuration(f64);

impl RequestDuration {
    pub fn from_seconds(seconds: f64) -> Result<Self, RequestLogDomainError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(RequestLogDomainError::InvalidDuration);
        }

        Ok(Self(seconds))
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }
}
