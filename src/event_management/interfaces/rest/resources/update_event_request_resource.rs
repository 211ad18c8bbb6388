use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Every field is optional; omitted fields keep their current value.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateEventRequestResource {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[schema(example = "CULTURAL")]
    pub event_type: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(range(min = 1))]
    pub expected_participants: Option<i32>,

    #[schema(example = "2026-11-21T09:00:00Z")]
    pub scheduled_at: Option<String>,

    pub coordinator_id: Option<String>,
}
