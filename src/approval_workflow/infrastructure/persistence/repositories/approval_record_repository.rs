use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    approval_workflow::domain::model::entities::approval_record::ApprovalRecord,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecisionWriteOutcome {
    Applied,
    PreconditionFailed,
}

#[async_trait]
pub trait ApprovalRecordRepository: Send + Sync {
    /// Moves the event from PENDING to the decided status and appends the
    /// record in one transaction. The status update is guarded on the event
    /// still being PENDING in the record's review cycle; when the guard
    /// matches no row nothing is written.
    async fn record_decision(
        &self,
        record: &ApprovalRecord,
    ) -> Result<DecisionWriteOutcome, WorkflowDomainError>;

    async fn list_by_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<ApprovalRecord>, WorkflowDomainError>;
}
