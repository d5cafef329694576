use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestLogDomainError {
    #[error("request duration must be a finite, non-negative number of seconds")]
    InvalidDuration,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
