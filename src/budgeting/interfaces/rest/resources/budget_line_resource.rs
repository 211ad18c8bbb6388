use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::budgeting::domain::{
    model::{entities::budget_line::BudgetLine, value_objects::budget_summary::BudgetSummary},
    services::budget_category_catalog::BudgetCategoryCatalog,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BudgetLineResource {
    pub event_id: String,
    pub category_id: String,
    pub category_name: Option<String>,
    #[schema(value_type = String)]
    pub amount: Decimal,
    #[schema(value_type = String)]
    pub sponsor_contribution: Decimal,
    #[schema(value_type = String)]
    pub net_requested: Decimal,
    pub remarks: Option<String>,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BudgetSummaryResource {
    pub lines: Vec<BudgetLineResource>,
    #[schema(value_type = String)]
    pub requested_total: Decimal,
    #[schema(value_type = String)]
    pub sponsor_total: Decimal,
    #[schema(value_type = String)]
    pub net_requested: Decimal,
}

impl BudgetLineResource {
    pub fn from_line(line: &BudgetLine, catalog: &BudgetCategoryCatalog) -> Self {
        Self {
            event_id: line.event_id().to_string(),
            category_id: line.category_id().to_string(),
            category_name: catalog
                .find(line.category_id())
                .map(|c| c.name().to_string()),
            amount: line.amount().value(),
            sponsor_contribution: line.sponsor_contribution().value(),
            net_requested: line.net_requested(),
            remarks: line.remarks().map(str::to_string),
            updated_at: line.updated_at().to_rfc3339(),
        }
    }
}

impl BudgetSummaryResource {
    pub fn from_summary(summary: &BudgetSummary, catalog: &BudgetCategoryCatalog) -> Self {
        Self {
            lines: summary
                .lines()
                .iter()
                .map(|line| BudgetLineResource::from_line(line, catalog))
                .collect(),
            requested_total: summary.requested_total(),
            sponsor_total: summary.sponsor_total(),
            net_requested: summary.net_requested(),
        }
    }
}
