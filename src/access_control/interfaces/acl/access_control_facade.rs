use async_trait::async_trait;

use crate::{
    access_control::domain::model::{
        enums::{access_control_domain_error::AccessControlDomainError, capability_action::CapabilityAction},
        value_objects::resource_ownership::ResourceOwnership,
    },
    iam_integration::domain::model::entities::principal::Principal,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[derive(Clone, Debug)]
pub struct AccessControlPermissionRequest {
    pub principal: Principal,
    pub action: CapabilityAction,
    pub ownership: Option<ResourceOwnership>,
    pub request_id: Option<String>,
}

impl AccessControlPermissionRequest {
    pub fn new(principal: Principal, action: CapabilityAction) -> Self {
        Self {
            principal,
            action,
            ownership: None,
            request_id: None,
        }
    }

    pub fn on_resource(mut self, ownership: ResourceOwnership) -> Self {
        self.ownership = Some(ownership);
        self
    }
}

#[derive(Clone, Debug)]
pub struct AccessControlPermissionDecision {
    pub allowed: bool,
    pub reason: String,
}

#[async_trait]
pub trait AccessControlFacade: Send + Sync {
    async fn check_permission(
        &self,
        request: AccessControlPermissionRequest,
    ) -> Result<AccessControlPermissionDecision, AccessControlDomainError>;
}

pub async fn require_permission(
    facade: &dyn AccessControlFacade,
    request: AccessControlPermissionRequest,
) -> Result<(), WorkflowDomainError> {
    let action = request.action;
    let decision = facade.check_permission(request).await?;

    if decision.allowed {
        Ok(())
    } else {
        Err(WorkflowDomainError::Unauthorized(format!(
            "{action} denied: {}",
            decision.reason
        )))
    }
}
