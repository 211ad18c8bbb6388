use async_trait::async_trait;

use crate::{
    approval_workflow::domain::model::{
        commands::{
            decide_budget_command::DecideBudgetCommand,
            resubmit_budget_command::ResubmitBudgetCommand,
        },
        entities::approval_record::ApprovalRecord,
    },
    event_management::domain::model::entities::event::Event,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[async_trait]
pub trait ApprovalCommandService: Send + Sync {
    async fn handle_decide(
        &self,
        command: DecideBudgetCommand,
    ) -> Result<ApprovalRecord, WorkflowDomainError>;

    async fn handle_resubmit(
        &self,
        command: ResubmitBudgetCommand,
    ) -> Result<Event, WorkflowDomainError>;
}
