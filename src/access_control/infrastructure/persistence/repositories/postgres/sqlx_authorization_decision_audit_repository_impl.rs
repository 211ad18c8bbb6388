use async_trait::async_trait;
use sqlx::PgPool;

use crate::access_control::{
    domain::model::{
        enums::access_control_domain_error::AccessControlDomainError,
        events::authorization_decision_audited_event::AuthorizationDecisionAuditedEvent,
    },
    infrastructure::persistence::repositories::authorization_decision_audit_repository::AuthorizationDecisionAuditRepository,
};

pub struct SqlxAuthorizationDecisionAuditRepositoryImpl {
    pool: PgPool,
}

impl SqlxAuthorizationDecisionAuditRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorizationDecisionAuditRepository for SqlxAuthorizationDecisionAuditRepositoryImpl {
    async fn append(
        &self,
        entry: &AuthorizationDecisionAuditedEvent,
    ) -> Result<(), AccessControlDomainError> {
        sqlx::query(
            r#"
            INSERT INTO access_authorization_decision_audit (
                principal_id, principal_role, capability, grant_scope,
                event_id, event_creator_id, request_id, effect, reason, decided_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(entry.principal_id.value())
        .bind(entry.role.as_str())
        .bind(entry.action.as_str())
        .bind(entry.grant_scope.map(|scope| scope.as_str()))
        .bind(entry.event_id)
        .bind(entry.event_creator_id.map(|id| id.value()))
        .bind(entry.request_id.as_deref())
        .bind(entry.effect.as_str())
        .bind(&entry.reason)
        .bind(entry.decided_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AccessControlDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }
}
