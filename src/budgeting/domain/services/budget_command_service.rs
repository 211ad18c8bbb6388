use async_trait::async_trait;

use crate::{
    budgeting::domain::model::{
        commands::submit_budget_command::SubmitBudgetCommand, entities::budget_line::BudgetLine,
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[async_trait]
pub trait BudgetCommandService: Send + Sync {
    async fn handle_submit(
        &self,
        command: SubmitBudgetCommand,
    ) -> Result<Vec<BudgetLine>, WorkflowDomainError>;
}
