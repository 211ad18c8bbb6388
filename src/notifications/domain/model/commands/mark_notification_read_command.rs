use uuid::Uuid;

use crate::iam_integration::domain::model::entities::principal::Principal;

#[derive(Clone, Debug)]
pub struct MarkNotificationReadCommand {
    principal: Principal,
    notification_id: Uuid,
}

impl MarkNotificationReadCommand {
    pub fn new(principal: Principal, notification_id: Uuid) -> Self {
        Self {
            principal,
            notification_id,
        }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn notification_id(&self) -> Uuid {
        self.notification_id
    }
}
