use std::sync::Arc;

use async_trait::async_trait;

use crate::access_control::{
    domain::{
        model::{
            enums::access_control_domain_error::AccessControlDomainError,
            queries::evaluate_permission_query::EvaluatePermissionQuery,
        },
        services::access_control_query_service::AccessControlQueryService,
    },
    interfaces::acl::access_control_facade::{
        AccessControlFacade, AccessControlPermissionDecision, AccessControlPermissionRequest,
    },
};

pub struct AccessControlFacadeImpl {
    query_service: Arc<dyn AccessControlQueryService>,
}

impl AccessControlFacadeImpl {
    pub fn new(query_service: Arc<dyn AccessControlQueryService>) -> Self {
        Self { query_service }
    }
}

#[async_trait]
impl AccessControlFacade for AccessControlFacadeImpl {
    async fn check_permission(
        &self,
        request: AccessControlPermissionRequest,
    ) -> Result<AccessControlPermissionDecision, AccessControlDomainError> {
        let query = EvaluatePermissionQuery::new(
            request.principal,
            request.action,
            request.ownership,
            request.request_id,
        );

        let result = self.query_service.handle_evaluate_permission(query).await?;

        Ok(AccessControlPermissionDecision {
            allowed: result.allowed(),
            reason: result.reason,
        })
    }
}
