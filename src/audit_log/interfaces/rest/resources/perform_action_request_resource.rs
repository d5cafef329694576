use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Both fields are optional at the wire level so that a missing field is
/// reported with the same message as an empty one.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct PerformActionRequestResource {
    #[serde(default)]
    #[validate(length(max = 50))]
    pub user: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub action: Option<String>,
}
