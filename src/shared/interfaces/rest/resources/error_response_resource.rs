use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponseResource {
    pub error: String,

    /// Underlying cause; only populated when the service runs with `DEBUG` on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponseResource {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>, debug: bool) -> Self {
        if debug {
            self.details = Some(details.into());
        }
        self
    }
}
