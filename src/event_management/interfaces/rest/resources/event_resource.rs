use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::event_management::domain::model::entities::event::Event;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EventResource {
    pub id: String,
    pub name: String,
    pub event_type: String,
    pub description: Option<String>,
    pub expected_participants: Option<i32>,
    pub scheduled_at: Option<String>,
    pub creator_id: String,
    pub coordinator_id: Option<String>,
    pub venue_id: Option<String>,
    pub status: String,
    pub review_cycle: i32,
    pub created_at: String,
}

impl From<Event> for EventResource {
    fn from(event: Event) -> Self {
        let details = event.details();
        Self {
            id: event.id().to_string(),
            name: details.name().value().to_string(),
            event_type: details.event_type().as_str().to_string(),
            description: details.description().map(str::to_string),
            expected_participants: details.expected_participants(),
            scheduled_at: details.scheduled_at().map(|at| at.to_rfc3339()),
            creator_id: event.creator_id().as_string(),
            coordinator_id: event.coordinator_id().map(|c| c.as_string()),
            venue_id: event.venue_id().map(|v| v.to_string()),
            status: event.status().as_str().to_string(),
            review_cycle: event.review_cycle(),
            created_at: event.created_at().to_rfc3339(),
        }
    }
}
