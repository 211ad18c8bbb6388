use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    budgeting::domain::services::budget_category_catalog::BudgetCategoryCatalog,
    venue_gate::domain::model::{
        entities::expense::Expense, value_objects::expense_ledger::ExpenseLedger,
    },
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ExpenseResource {
    pub id: String,
    pub event_id: String,
    pub category_id: String,
    pub category_name: Option<String>,
    pub item_name: String,
    #[schema(value_type = String)]
    pub amount: Decimal,
    pub added_by: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ExpenseLedgerResource {
    pub expenses: Vec<ExpenseResource>,
    #[schema(value_type = String)]
    pub spent_total: Decimal,
}

impl ExpenseResource {
    pub fn from_expense(expense: &Expense, catalog: &BudgetCategoryCatalog) -> Self {
        Self {
            id: expense.id().to_string(),
            event_id: expense.event_id().to_string(),
            category_id: expense.category_id().to_string(),
            category_name: catalog
                .find(expense.category_id())
                .map(|c| c.name().to_string()),
            item_name: expense.item_name().to_string(),
            amount: expense.amount().value(),
            added_by: expense.added_by().as_string(),
            created_at: expense.created_at().to_rfc3339(),
        }
    }
}

impl ExpenseLedgerResource {
    pub fn from_ledger(ledger: &ExpenseLedger, catalog: &BudgetCategoryCatalog) -> Self {
        Self {
            expenses: ledger
                .expenses()
                .iter()
                .map(|expense| ExpenseResource::from_expense(expense, catalog))
                .collect(),
            spent_total: ledger.spent_total(),
        }
    }
}
