use uuid::Uuid;

use crate::iam_integration::domain::model::entities::principal::Principal;

#[derive(Clone, Debug)]
pub struct ListApprovalHistoryQuery {
    principal: Principal,
    event_id: Uuid,
}

impl ListApprovalHistoryQuery {
    pub fn new(principal: Principal, event_id: Uuid) -> Self {
        Self {
            principal,
            event_id,
        }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }
}
