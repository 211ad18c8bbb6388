use uuid::Uuid;

use crate::iam_integration::domain::model::entities::principal::Principal;

#[derive(Clone, Debug)]
pub struct AssignVenueCommand {
    principal: Principal,
    event_id: Uuid,
    venue_id: Uuid,
}

impl AssignVenueCommand {
    pub fn new(principal: Principal, event_id: Uuid, venue_id: Uuid) -> Self {
        Self {
            principal,
            event_id,
            venue_id,
        }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn venue_id(&self) -> Uuid {
        self.venue_id
    }
}
