use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PerformActionResponseResource {
    pub message: String,
    pub id: String,
    pub inserted_at: String,
}
