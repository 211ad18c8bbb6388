use thiserror::Error;

use crate::shared::domain::model::enums::workflow_domain_error::WorkflowDomainError;

#[derive(Debug, Error)]
pub enum AccessControlDomainError {
    #[error("action name is invalid")]
    InvalidActionName,

    #[error("resource owner id is invalid")]
    InvalidResourceOwner,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}

impl From<AccessControlDomainError> for WorkflowDomainError {
    fn from(error: AccessControlDomainError) -> Self {
        match error {
            AccessControlDomainError::InfrastructureError(detail) => Self::SystemFailure(detail),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
