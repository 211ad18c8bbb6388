use crate::iam_integration::domain::model::entities::principal::Principal;

#[derive(Clone, Debug)]
pub struct MarkAllNotificationsReadCommand {
    principal: Principal,
}

impl MarkAllNotificationsReadCommand {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }
}
