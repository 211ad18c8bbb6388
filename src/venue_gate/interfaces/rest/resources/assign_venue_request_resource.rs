use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct AssignVenueRequestResource {
    #[validate(length(min = 1))]
    pub venue_id: String,
}
