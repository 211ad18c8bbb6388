use async_trait::async_trait;

use crate::{
    iam_integration::domain::model::{
        entities::principal::Principal, enums::principal_role::PrincipalRole,
        value_objects::principal_id::PrincipalId,
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[derive(Clone, Debug)]
pub struct PrincipalDirectoryEntry {
    pub principal: Principal,
    pub display_name: String,
    pub is_active: bool,
}

#[async_trait]
pub trait PrincipalDirectoryRepository: Send + Sync {
    async fn find_by_id(
        &self,
        principal_id: PrincipalId,
    ) -> Result<Option<PrincipalDirectoryEntry>, WorkflowDomainError>;

    async fn find_active_by_role(
        &self,
        role: PrincipalRole,
    ) -> Result<Vec<PrincipalDirectoryEntry>, WorkflowDomainError>;
}
