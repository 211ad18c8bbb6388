use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct EvaluatePermissionRequestResource {
    #[validate(length(min = 1))]
    pub action: String,
    pub resource_id: Option<String>,
    pub creator_id: Option<String>,
    pub coordinator_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EvaluatePermissionResponseResource {
    pub allowed: bool,
    pub effect: String,
    pub reason: String,
}
