use crate::{
    event_management::domain::model::enums::{
        event_status::EventStatus, event_visibility::EventVisibility,
    },
    iam_integration::domain::model::entities::principal::Principal,
};

#[derive(Clone, Debug)]
pub struct ListEventsQuery {
    principal: Principal,
    status: Option<EventStatus>,
}

impl ListEventsQuery {
    pub fn new(principal: Principal, status: Option<EventStatus>) -> Self {
        Self { principal, status }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn status(&self) -> Option<EventStatus> {
        self.status
    }

    pub fn visibility(&self) -> EventVisibility {
        EventVisibility::for_principal(&self.principal)
    }
}
