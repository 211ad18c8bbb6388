use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::venue_gate::domain::model::entities::venue::Venue;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct VenueResource {
    pub id: String,
    pub name: String,
    pub capacity: Option<i32>,
}

impl From<Venue> for VenueResource {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id().to_string(),
            name: venue.name().to_string(),
            capacity: venue.capacity(),
        }
    }
}
