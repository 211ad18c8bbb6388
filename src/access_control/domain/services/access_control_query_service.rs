use async_trait::async_trait;

use crate::access_control::domain::model::{
    enums::{access_control_domain_error::AccessControlDomainError, permission_effect::PermissionEffect},
    queries::evaluate_permission_query::EvaluatePermissionQuery,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorizationDecisionResult {
    pub effect: PermissionEffect,
    pub reason: String,
}

impl AuthorizationDecisionResult {
    pub fn allow(reason: impl Into<String>) -> Self {
        Self {
            effect: PermissionEffect::Allow,
            reason: reason.into(),
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            effect: PermissionEffect::Deny,
            reason: reason.into(),
        }
    }

    pub fn allowed(&self) -> bool {
        self.effect.is_allow()
    }
}

#[async_trait]
pub trait AccessControlQueryService: Send + Sync {
    async fn handle_evaluate_permission(
        &self,
        query: EvaluatePermissionQuery,
    ) -> Result<AuthorizationDecisionResult, AccessControlDomainError>;
}
