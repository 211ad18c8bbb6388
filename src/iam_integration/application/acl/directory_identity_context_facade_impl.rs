use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    iam_integration::{
        domain::model::{entities::principal::Principal, value_objects::principal_id::PrincipalId},
        infrastructure::persistence::repositories::principal_directory_repository::PrincipalDirectoryRepository,
        interfaces::acl::identity_context_facade::{IamIntegrationError, IdentityContextFacade},
    },
    shared::application::retry_policy::RetryPolicy,
};

pub struct DirectoryIdentityContextFacadeImpl {
    directory_repository: Arc<dyn PrincipalDirectoryRepository>,
    retry_policy: RetryPolicy,
}

impl DirectoryIdentityContextFacadeImpl {
    pub fn new(
        directory_repository: Arc<dyn PrincipalDirectoryRepository>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            directory_repository,
            retry_policy,
        }
    }
}

#[async_trait]
impl IdentityContextFacade for DirectoryIdentityContextFacadeImpl {
    async fn resolve_principal(&self, subject_id: &str) -> Result<Principal, IamIntegrationError> {
        let principal_id =
            PrincipalId::new(subject_id).map_err(IamIntegrationError::InvalidSubject)?;

        let entry = self
            .retry_policy
            .run("principal_directory.find_by_id", || {
                self.directory_repository.find_by_id(principal_id)
            })
            .await
            .map_err(|e| IamIntegrationError::Unavailable(e.to_string()))?
            .ok_or(IamIntegrationError::UnknownPrincipal)?;

        if !entry.is_active {
            return Err(IamIntegrationError::InactivePrincipal);
        }

        Ok(entry.principal)
    }
}
