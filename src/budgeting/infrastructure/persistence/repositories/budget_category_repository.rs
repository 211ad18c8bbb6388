use async_trait::async_trait;

use crate::{
    budgeting::domain::model::entities::budget_category::BudgetCategory,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[async_trait]
pub trait BudgetCategoryRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<BudgetCategory>, WorkflowDomainError>;
}
