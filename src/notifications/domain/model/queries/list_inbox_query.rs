use crate::iam_integration::domain::model::entities::principal::Principal;

#[derive(Clone, Debug)]
pub struct ListInboxQuery {
    principal: Principal,
    unread_only: bool,
}

impl ListInboxQuery {
    pub fn new(principal: Principal, unread_only: bool) -> Self {
        Self {
            principal,
            unread_only,
        }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn unread_only(&self) -> bool {
        self.unread_only
    }
}
