use crate::{
    access_control::domain::model::{
        enums::capability_action::CapabilityAction,
        value_objects::resource_ownership::ResourceOwnership,
    },
    iam_integration::domain::model::entities::principal::Principal,
};

#[derive(Clone, Debug)]
pub struct EvaluatePermissionQuery {
    principal: Principal,
    action: CapabilityAction,
    ownership: Option<ResourceOwnership>,
    request_id: Option<String>,
}

impl EvaluatePermissionQuery {
    pub fn new(
        principal: Principal,
        action: CapabilityAction,
        ownership: Option<ResourceOwnership>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            principal,
            action,
            ownership,
            request_id: request_id.filter(|id| !id.trim().is_empty()),
        }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }
    pub fn action(&self) -> CapabilityAction {
        self.action
    }
    pub fn ownership(&self) -> Option<&ResourceOwnership> {
        self.ownership.as_ref()
    }
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}
