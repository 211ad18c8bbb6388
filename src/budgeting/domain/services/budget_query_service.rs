use async_trait::async_trait;

use crate::{
    budgeting::domain::model::{
        entities::budget_category::BudgetCategory, queries::get_budget_query::GetBudgetQuery,
        value_objects::budget_summary::BudgetSummary,
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[async_trait]
pub trait BudgetQueryService: Send + Sync {
    async fn handle_get_summary(
        &self,
        query: GetBudgetQuery,
    ) -> Result<BudgetSummary, WorkflowDomainError>;

    fn list_categories(&self) -> Vec<BudgetCategory>;
}
