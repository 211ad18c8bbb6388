use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SubmitBudgetRequestResource {
    #[validate(length(min = 1), nested)]
    pub lines: Vec<BudgetLineRequestResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct BudgetLineRequestResource {
    pub category_id: String,

    #[schema(value_type = String, example = "1500.00")]
    pub amount: Decimal,

    #[schema(value_type = Option<String>, example = "250.00")]
    pub sponsor_contribution: Option<Decimal>,

    #[validate(length(max = 500))]
    pub remarks: Option<String>,
}
