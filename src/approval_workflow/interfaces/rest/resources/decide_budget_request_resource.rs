use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct DecideBudgetRequestResource {
    #[schema(example = "APPROVED")]
    pub decision: String,

    #[validate(length(max = 2000))]
    pub remarks: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct ResubmitBudgetRequestResource {
    #[validate(length(max = 1000))]
    pub note: Option<String>,
}
