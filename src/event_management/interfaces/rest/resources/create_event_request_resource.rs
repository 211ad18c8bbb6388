use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateEventRequestResource {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[schema(example = "TECHNICAL")]
    pub event_type: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(range(min = 1))]
    pub expected_participants: Option<i32>,

    #[schema(example = "2026-11-20T09:00:00Z")]
    pub scheduled_at: Option<String>,

    pub coordinator_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ListEventsQueryResource {
    pub status: Option<String>,
}
