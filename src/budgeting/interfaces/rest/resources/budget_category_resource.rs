use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::budgeting::domain::model::entities::budget_category::BudgetCategory;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BudgetCategoryResource {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
}

impl From<BudgetCategory> for BudgetCategoryResource {
    fn from(category: BudgetCategory) -> Self {
        Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            display_order: category.display_order(),
        }
    }
}
