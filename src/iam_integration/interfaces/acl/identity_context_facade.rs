use async_trait::async_trait;

use crate::iam_integration::domain::model::entities::principal::Principal;

#[derive(Debug, thiserror::Error)]
pub enum IamIntegrationError {
    #[error("invalid subject: {0}")]
    InvalidSubject(String),

    #[error("principal is not registered")]
    UnknownPrincipal,

    #[error("principal is inactive")]
    InactivePrincipal,

    #[error("identity directory unavailable: {0}")]
    Unavailable(String),
}

/// Resolves an upstream-verified subject id to the acting principal.
#[async_trait]
pub trait IdentityContextFacade: Send + Sync {
    async fn resolve_principal(&self, subject_id: &str) -> Result<Principal, IamIntegrationError>;
}
