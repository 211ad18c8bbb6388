use async_trait::async_trait;

use crate::{
    approval_workflow::domain::model::{
        entities::approval_record::ApprovalRecord,
        queries::list_approval_history_query::ListApprovalHistoryQuery,
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[async_trait]
pub trait ApprovalQueryService: Send + Sync {
    async fn handle_list_history(
        &self,
        query: ListApprovalHistoryQuery,
    ) -> Result<Vec<ApprovalRecord>, WorkflowDomainError>;
}
