use async_trait::async_trait;

use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError,
    events::authorization_decision_audited_event::AuthorizationDecisionAuditedEvent,
};

/// Append-only trail of permission checks.
#[async_trait]
pub trait AuthorizationDecisionAuditRepository: Send + Sync {
    async fn append(
        &self,
        entry: &AuthorizationDecisionAuditedEvent,
    ) -> Result<(), AccessControlDomainError>;
}
