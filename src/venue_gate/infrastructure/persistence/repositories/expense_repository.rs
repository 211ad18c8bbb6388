use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
    venue_gate::domain::model::entities::expense::Expense,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExpenseWriteOutcome {
    Applied,
    EventNotApproved,
}

#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Inserts the expense only if its event is APPROVED at write time.
    async fn insert_while_approved(
        &self,
        expense: &Expense,
    ) -> Result<ExpenseWriteOutcome, WorkflowDomainError>;

    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Expense>, WorkflowDomainError>;
}
