use std::sync::Arc;

use uuid::Uuid;

use crate::{
    budgeting::domain::model::entities::budget_category::BudgetCategory,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

/// Closed set of budget categories, loaded once and never mutated.
#[derive(Clone, Debug)]
pub struct BudgetCategoryCatalog {
    categories: Arc<[BudgetCategory]>,
}

impl BudgetCategoryCatalog {
    pub fn new(mut categories: Vec<BudgetCategory>) -> Self {
        categories.sort_by(|a, b| {
            a.display_order()
                .cmp(&b.display_order())
                .then_with(|| a.name().cmp(b.name()))
        });
        Self {
            categories: categories.into(),
        }
    }

    pub fn all(&self) -> &[BudgetCategory] {
        &self.categories
    }

    pub fn find(&self, category_id: Uuid) -> Option<&BudgetCategory> {
        self.categories.iter().find(|c| c.id() == category_id)
    }

    pub fn ensure_known(&self, category_id: Uuid) -> Result<&BudgetCategory, WorkflowDomainError> {
        self.find(category_id).ok_or_else(|| {
            WorkflowDomainError::InvalidInput(format!("unknown budget category {category_id}"))
        })
    }

    /// Catalog position of a category; unknown ids sort last.
    pub fn position(&self, category_id: Uuid) -> usize {
        self.categories
            .iter()
            .position(|c| c.id() == category_id)
            .unwrap_or(usize::MAX)
    }
}
