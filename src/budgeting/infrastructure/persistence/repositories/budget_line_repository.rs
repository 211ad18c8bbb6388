use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    budgeting::domain::model::entities::budget_line::BudgetLine,
    event_management::domain::model::enums::event_status::EventStatus,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BudgetUpsertOutcome {
    Applied,
    EventNotPending(EventStatus),
    EventMissing,
}

#[async_trait]
pub trait BudgetLineRepository: Send + Sync {
    /// Replaces each `(event_id, category_id)` line in one transaction, after
    /// re-reading the event status under a row lock.
    async fn upsert_lines_while_pending(
        &self,
        event_id: Uuid,
        lines: &[BudgetLine],
    ) -> Result<BudgetUpsertOutcome, WorkflowDomainError>;

    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<BudgetLine>, WorkflowDomainError>;
}
