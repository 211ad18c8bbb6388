use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    access_control::{
        domain::{
            model::{
                enums::access_control_domain_error::AccessControlDomainError,
                events::authorization_decision_audited_event::AuthorizationDecisionAuditedEvent,
                queries::evaluate_permission_query::EvaluatePermissionQuery,
            },
            services::{
                access_control_query_service::{
                    AccessControlQueryService, AuthorizationDecisionResult,
                },
                authorization_matrix::AuthorizationMatrix,
            },
        },
        infrastructure::persistence::repositories::authorization_decision_audit_repository::AuthorizationDecisionAuditRepository,
    },
    shared::{
        application::retry_policy::RetryPolicy,
        domain::model::enums::workflow_domain_error::WorkflowDomainError,
    },
};

pub struct AccessControlQueryServiceImpl {
    decision_audit_repository: Arc<dyn AuthorizationDecisionAuditRepository>,
    retry_policy: RetryPolicy,
}

impl AccessControlQueryServiceImpl {
    pub fn new(
        decision_audit_repository: Arc<dyn AuthorizationDecisionAuditRepository>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            decision_audit_repository,
            retry_policy,
        }
    }

    async fn audit(&self, query: &EvaluatePermissionQuery, decision: &AuthorizationDecisionResult) {
        let principal = query.principal();
        let entry = AuthorizationDecisionAuditedEvent {
            principal_id: principal.id(),
            role: principal.role(),
            action: query.action(),
            grant_scope: AuthorizationMatrix::grant_scope(principal.role(), query.action()),
            event_id: query.ownership().map(|o| o.resource_id()),
            event_creator_id: query.ownership().map(|o| o.creator_id()),
            request_id: query.request_id().map(str::to_string),
            effect: decision.effect,
            reason: decision.reason.clone(),
            decided_at: Utc::now(),
        };

        let appended = self
            .retry_policy
            .run_once("authorization_audit.append", async {
                self.decision_audit_repository
                    .append(&entry)
                    .await
                    .map_err(WorkflowDomainError::from)
            })
            .await;

        if let Err(error) = appended {
            tracing::warn!(
                principal_id = %entry.principal_id,
                action = %entry.action,
                error = %error,
                "failed to persist authorization audit entry"
            );
        }
    }
}

#[async_trait]
impl AccessControlQueryService for AccessControlQueryServiceImpl {
    async fn handle_evaluate_permission(
        &self,
        query: EvaluatePermissionQuery,
    ) -> Result<AuthorizationDecisionResult, AccessControlDomainError> {
        let decision =
            AuthorizationMatrix::authorize(query.principal(), query.action(), query.ownership());

        if !decision.allowed() {
            tracing::info!(
                principal_id = %query.principal().id(),
                role = %query.principal().role(),
                action = %query.action(),
                reason = %decision.reason,
                "authorization denied"
            );
        }

        self.audit(&query, &decision).await;
        Ok(decision)
    }
}
